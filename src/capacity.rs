//! Power-of-two capacity rounding shared by every container.

/// Largest capacity `next_power_of_two` will return.
pub const MAX_CAPACITY: i32 = 1 << 30;

/// Returns the smallest power of two greater than or equal to `n`.
///
/// Non-positive inputs yield 1 and anything at or above `2^30` is capped to
/// `2^30` so the result always fits in an `i32`.
pub const fn next_power_of_two(n: i32) -> i32 {
    if n <= 0 {
        return 1;
    }
    if n >= MAX_CAPACITY {
        return MAX_CAPACITY;
    }

    // Start from n - 1 so exact powers of two map to themselves.
    let mut n = n - 1;
    n |= n >> 1;
    n |= n >> 2;
    n |= n >> 4;
    n |= n >> 8;
    n |= n >> 16;
    n + 1
}

/// Slot count for a requested container capacity.
pub(crate) fn slot_count(requested: usize) -> usize {
    let clamped = i32::try_from(requested).unwrap_or(i32::MAX);
    next_power_of_two(clamped) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_round_up() {
        let cases = [
            (0, 1),
            (1, 1),
            (2, 2),
            (3, 4),
            (4, 4),
            (5, 8),
            (7, 8),
            (8, 8),
            (9, 16),
            (15, 16),
            (16, 16),
            (17, 32),
            (100, 128),
            (129, 256),
            (1025, 2048),
            (9999, 16384),
            (65535, 65536),
            (65536, 65536),
            (65537, 131072),
        ];
        for (input, expected) in cases {
            assert_eq!(next_power_of_two(input), expected, "input {input}");
        }
    }

    #[test]
    fn non_positive_yields_one() {
        assert_eq!(next_power_of_two(-1), 1);
        assert_eq!(next_power_of_two(-5), 1);
        assert_eq!(next_power_of_two(i32::MIN), 1);
    }

    #[test]
    fn large_values_are_capped() {
        assert_eq!(next_power_of_two(MAX_CAPACITY), MAX_CAPACITY);
        assert_eq!(next_power_of_two(MAX_CAPACITY + 1), MAX_CAPACITY);
        assert_eq!(next_power_of_two(i32::MAX), MAX_CAPACITY);
    }

    #[test]
    fn every_power_of_two_is_a_fixed_point() {
        for shift in 0..=30 {
            let p = 1i32 << shift;
            assert_eq!(next_power_of_two(p), p);
            if p > 2 {
                assert_eq!(next_power_of_two(p - 1), p);
            }
        }
    }

    #[test]
    fn slot_count_clamps_usize_requests() {
        assert_eq!(slot_count(0), 1);
        assert_eq!(slot_count(12), 16);
        assert_eq!(slot_count(usize::MAX), MAX_CAPACITY as usize);
    }
}
