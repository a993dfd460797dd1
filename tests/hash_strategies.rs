use celerity::{next_power_of_two, Fnv1a, HashError, HashStrategy, Murmur3, Spooky, WangNaive};
use proptest::prelude::*;

#[test]
fn locked_vectors() {
    assert_eq!(WangNaive.hash(&0), 0);
    assert_eq!(WangNaive.hash(&65536), 65537);
    assert_eq!(Murmur3.hash(&0), 0);
    assert_eq!(Spooky.hash(&0), -749474287);
    assert_eq!(Fnv1a.hash(""), -2128831035);
    assert_eq!(Fnv1a.hash("a"), -468965076);
    assert_eq!(Fnv1a.hash("hello"), 1335831723);
}

#[test]
fn missing_string_key() {
    let err = Fnv1a::try_hash(None).unwrap_err();
    assert_eq!(err, HashError::MissingKey);
    assert_eq!(err.to_string(), "cannot hash a missing key");
}

#[test]
fn capacity_rounding() {
    assert_eq!(next_power_of_two(-7), 1);
    assert_eq!(next_power_of_two(0), 1);
    assert_eq!(next_power_of_two(64), 64);
    assert_eq!(next_power_of_two(65), 128);
    assert_eq!(next_power_of_two(i32::MAX), 1 << 30);
}

proptest! {
    #[test]
    fn prop_strategies_are_deterministic(a in any::<i32>(), b in any::<i64>(), s in ".{0,24}") {
        prop_assert_eq!(WangNaive.hash(&a), WangNaive.hash(&a));
        prop_assert_eq!(Murmur3.hash(&b), Murmur3.hash(&b));
        prop_assert_eq!(Spooky.hash(&b), Spooky.hash(&b));
        prop_assert_eq!(Fnv1a.hash(s.as_str()), Fnv1a.hash(&s));
        prop_assert_eq!(Fnv1a::try_hash(Some(s.as_str())), Ok(Fnv1a.hash(s.as_str())));
    }

    #[test]
    fn prop_next_power_of_two_is_tight(n in 1i32..(1 << 30)) {
        let p = next_power_of_two(n);
        prop_assert!(p >= n);
        prop_assert_eq!(p.count_ones(), 1);
        prop_assert!(p / 2 < n);
    }
}
