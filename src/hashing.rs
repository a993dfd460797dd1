//! Stateless 32-bit hash strategies.
//!
//! Each strategy is a zero-sized type implementing [`HashStrategy`] for the
//! key types it understands. Tables take the strategy as a type parameter,
//! so the hash call is monomorphized into the probe loop.
//!
//! None of these are suitable where an attacker controls the keys.

use crate::error::HashError;

/// A pure mapping from a key to a 32-bit hash.
pub trait HashStrategy<K: ?Sized>: Copy + Default {
    fn hash(&self, key: &K) -> i32;
}

/// `k ^ (k >> 16)` over `i32` keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WangNaive;

impl HashStrategy<i32> for WangNaive {
    #[inline(always)]
    fn hash(&self, key: &i32) -> i32 {
        wang_naive(*key)
    }
}

/// Shared with the integer-key table, which inlines it directly.
#[inline(always)]
pub(crate) const fn wang_naive(key: i32) -> i32 {
    key ^ (key >> 16)
}

/// Murmur3 64-bit finalizer, truncated to 32 bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Murmur3;

impl Murmur3 {
    const C1: u64 = 0xff51_afd7_ed55_8ccd;
    const C2: u64 = 0xc4ce_b9fe_1a85_ec53;
}

impl HashStrategy<i64> for Murmur3 {
    #[inline(always)]
    fn hash(&self, key: &i64) -> i32 {
        let mut k = *key as u64;
        k ^= k >> 33;
        k = k.wrapping_mul(Self::C1);
        k ^= k >> 33;
        k = k.wrapping_mul(Self::C2);
        k ^= k >> 33;
        k as i32
    }
}

/// SpookyHash short-end mix of a single 64-bit word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spooky;

impl Spooky {
    const SEED: u64 = 0xDEAD_BEEF_DEAD_BEEF;

    #[inline(always)]
    fn short_end(a: &mut u64, b: &mut u64, c: &mut u64, d: &mut u64) {
        *d ^= *c;
        *c = c.rotate_left(15);
        *d = d.wrapping_add(*c);
        *a ^= *d;
        *d = d.rotate_left(52);
        *a = a.wrapping_add(*d);
        *b ^= *a;
        *a = a.rotate_left(26);
        *b = b.wrapping_add(*a);
        *c ^= *b;
        *b = b.rotate_left(51);
        *c = c.wrapping_add(*b);
        *d ^= *c;
        *c = c.rotate_left(28);
        *d = d.wrapping_add(*c);
        *a ^= *d;
        *d = d.rotate_left(9);
        *a = a.wrapping_add(*d);
        *b ^= *a;
        *a = a.rotate_left(47);
        *b = b.wrapping_add(*a);
        *c ^= *b;
        *b = b.rotate_left(54);
        *c = c.wrapping_add(*b);
        *d ^= *c;
        *c = c.rotate_left(32);
        *d = d.wrapping_add(*c);
        *a ^= *d;
        *d = d.rotate_left(25);
        *a = a.wrapping_add(*d);
        *b ^= *a;
        *a = a.rotate_left(63);
        *b = b.wrapping_add(*a);
    }
}

impl HashStrategy<i64> for Spooky {
    #[inline(always)]
    fn hash(&self, key: &i64) -> i32 {
        let mut a = 0u64;
        let mut b = 0u64;
        let mut c = Self::SEED.wrapping_add(*key as u64);
        let mut d = Self::SEED;
        Self::short_end(&mut a, &mut b, &mut c, &mut d);
        c as i32
    }
}

/// FNV-1a over UTF-16 code units.
///
/// Only the low byte of each code unit is mixed in, so characters outside
/// Latin-1 collide more than a byte-wise FNV-1a would. Existing hash values
/// depend on this, so it stays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fnv1a;

impl Fnv1a {
    const OFFSET_BASIS: u32 = 2_166_136_261;
    const PRIME: u32 = 16_777_619;

    /// Hashes an optional key, failing when it is absent.
    pub fn try_hash(key: Option<&str>) -> Result<i32, HashError> {
        key.map(Self::hash_str).ok_or(HashError::MissingKey)
    }

    #[inline]
    fn hash_str(key: &str) -> i32 {
        let mut hash = Self::OFFSET_BASIS;
        for unit in key.encode_utf16() {
            hash ^= u32::from(unit & 0xFF);
            hash = hash.wrapping_mul(Self::PRIME);
        }
        hash as i32
    }
}

impl HashStrategy<str> for Fnv1a {
    #[inline]
    fn hash(&self, key: &str) -> i32 {
        Self::hash_str(key)
    }
}

impl HashStrategy<String> for Fnv1a {
    #[inline]
    fn hash(&self, key: &String) -> i32 {
        Self::hash_str(key)
    }
}
