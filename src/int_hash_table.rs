//! IntHashTable: `i32`-keyed twin of `HashTable` with the Wang-naive hash inlined.
//!
//! The probing, growth and removal logic mirrors `hash_table` step for step.
//! Keeping it as a separate type lets the empty check compile to a plain
//! integer comparison against `EMPTY_KEY`.

use crate::capacity::slot_count;
use crate::config::{threshold_for, TableConfig, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR};
use crate::error::{ConfigError, LookupError};
use crate::hash_table::vacant;
use crate::hashing::wang_naive;
use core::fmt;
use core::mem;
use tracing::{debug, trace};

/// Key value reserved for empty slots; it cannot be stored.
pub const EMPTY_KEY: i32 = 0;

pub struct IntHashTable<V> {
    keys: Box<[i32]>,
    values: Box<[V]>,
    count: usize,
    threshold: usize,
    load_factor: f32,
}

impl<V: Default> IntHashTable<V> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(slot_count(capacity), DEFAULT_LOAD_FACTOR)
    }

    pub fn with_capacity_and_load_factor(
        capacity: usize,
        load_factor: f32,
    ) -> Result<Self, ConfigError> {
        Self::with_config(
            TableConfig::new()
                .capacity(capacity)
                .load_factor(load_factor),
        )
    }

    pub fn with_config(config: TableConfig) -> Result<Self, ConfigError> {
        let (slots, load_factor) = config.resolve()?;
        Ok(Self::from_parts(slots, load_factor))
    }

    fn from_parts(slots: usize, load_factor: f32) -> Self {
        Self {
            keys: vec![EMPTY_KEY; slots].into_boxed_slice(),
            values: vacant(slots),
            count: 0,
            threshold: threshold_for(slots, load_factor),
            load_factor,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
    pub fn capacity(&self) -> usize {
        self.keys.len()
    }
    pub fn load_factor(&self) -> f32 {
        self.load_factor
    }

    #[inline(always)]
    fn home_slot(&self, key: i32) -> usize {
        (wang_naive(key) as u32 as usize) & (self.keys.len() - 1)
    }

    fn probe_for_key(&self, key: i32) -> Option<usize> {
        let mask = self.keys.len() - 1;
        let mut index = self.home_slot(key);
        for _ in 0..self.keys.len() {
            let k = self.keys[index];
            if k == EMPTY_KEY {
                return None;
            }
            if k == key {
                return Some(index);
            }
            index = (index + 1) & mask;
        }
        None
    }

    fn probe_for_insert(&self, key: i32) -> usize {
        let mask = self.keys.len() - 1;
        let mut index = self.home_slot(key);
        while self.keys[index] != EMPTY_KEY && self.keys[index] != key {
            index = (index + 1) & mask;
        }
        index
    }

    pub fn get(&self, key: i32) -> Result<&V, LookupError> {
        self.probe_for_key(key)
            .map(|i| &self.values[i])
            .ok_or(LookupError::KeyNotFound)
    }

    pub fn get_mut(&mut self, key: i32) -> Result<&mut V, LookupError> {
        match self.probe_for_key(key) {
            Some(i) => Ok(&mut self.values[i]),
            None => Err(LookupError::KeyNotFound),
        }
    }

    pub fn contains_key(&self, key: i32) -> bool {
        self.probe_for_key(key).is_some()
    }

    /// Inserts or overwrites `key`. `key` must not be [`EMPTY_KEY`].
    pub fn set(&mut self, key: i32, value: V) {
        debug_assert!(key != EMPTY_KEY, "key 0 marks empty slots and cannot be stored");
        if self.count >= self.threshold {
            self.grow();
        }

        let index = self.probe_for_insert(key);
        let is_new = self.keys[index] == EMPTY_KEY;
        self.keys[index] = key;
        self.values[index] = value;
        if is_new {
            self.count += 1;
        }
    }

    pub fn remove(&mut self, key: i32) -> bool {
        let Some(index) = self.probe_for_key(key) else {
            return false;
        };
        let _ = self.take_slot(index);
        self.rehash_cluster_after(index);
        true
    }

    fn take_slot(&mut self, index: usize) -> (i32, V) {
        let key = mem::replace(&mut self.keys[index], EMPTY_KEY);
        let value = mem::take(&mut self.values[index]);
        self.count -= 1;
        (key, value)
    }

    fn rehash_cluster_after(&mut self, start: usize) {
        let mask = self.keys.len() - 1;
        let mut index = (start + 1) & mask;
        let mut moved = 0usize;
        while self.keys[index] != EMPTY_KEY {
            let (key, value) = self.take_slot(index);
            self.set(key, value);
            moved += 1;
            index = (index + 1) & mask;
        }
        if moved > 0 {
            trace!(moved, "rehashed int cluster after removal");
        }
    }

    fn grow(&mut self) {
        let old_capacity = self.keys.len();
        let mut new_capacity = old_capacity * 2;
        while threshold_for(new_capacity, self.load_factor) <= self.count {
            new_capacity *= 2;
        }

        let old_keys = mem::replace(
            &mut self.keys,
            vec![EMPTY_KEY; new_capacity].into_boxed_slice(),
        );
        let old_values = mem::replace(&mut self.values, vacant(new_capacity));
        let live = self.count;
        self.threshold = threshold_for(new_capacity, self.load_factor);
        self.count = 0;

        for (key, value) in old_keys.iter().copied().zip(old_values.into_vec()) {
            if key != EMPTY_KEY {
                self.set(key, value);
            }
        }
        debug!(old_capacity, new_capacity, live, "int hash table grew");
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            it: self.keys.iter().zip(self.values.iter()),
        }
    }
}

impl<V: Default> Default for IntHashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Default + fmt::Debug> fmt::Debug for IntHashTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over live `(key, &value)` pairs in slot order.
pub struct Iter<'a, V> {
    it: core::iter::Zip<core::slice::Iter<'a, i32>, core::slice::Iter<'a, V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i32, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it
            .find(|&(&k, _)| k != EMPTY_KEY)
            .map(|(&k, v)| (k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot_of<V>(t: &IntHashTable<V>, key: i32) -> usize {
        t.keys.iter().position(|&k| k == key).expect("key stored")
    }

    #[test]
    fn insert_get_overwrite() {
        let mut m = IntHashTable::new();
        m.set(10, 100);
        m.set(10, 101);
        assert_eq!(m.get(10), Ok(&101));
        assert_eq!(m.len(), 1);
        assert_eq!(m.get(11), Err(LookupError::KeyNotFound));
    }

    #[test]
    fn negative_keys_are_ordinary_keys() {
        let mut m = IntHashTable::new();
        for k in [-1, i32::MIN, i32::MAX, -65536] {
            m.set(k, k as i64);
        }
        for k in [-1, i32::MIN, i32::MAX, -65536] {
            assert_eq!(m.get(k), Ok(&(k as i64)));
        }
        assert_eq!(m.len(), 4);
    }

    #[test]
    fn remove_then_reinsert() {
        let mut m = IntHashTable::new();
        m.set(7, "x");
        assert!(m.remove(7));
        assert!(!m.remove(7));
        assert!(!m.contains_key(7));
        m.set(7, "y");
        assert_eq!(m.get(7), Ok(&"y"));
    }

    #[test]
    fn grows_past_threshold_and_keeps_entries() {
        let mut m: IntHashTable<i32> = IntHashTable::with_capacity(4);
        for k in 1..=4 {
            m.set(k, k * 10);
        }
        assert_eq!(m.capacity(), 8);
        assert_eq!(m.len(), 4);
        for k in 1..=4 {
            assert_eq!(m.get(k), Ok(&(k * 10)));
        }
    }

    #[test]
    fn cluster_rehash_preserves_collisions() {
        let mut m = IntHashTable::new();
        m.set(1, 'a');
        m.set(17, 'b');
        m.set(33, 'c');
        assert_eq!((slot_of(&m, 17), slot_of(&m, 33)), (2, 3));

        assert!(m.remove(1));
        assert_eq!(m.get(17), Ok(&'b'));
        assert_eq!(m.get(33), Ok(&'c'));
        assert_eq!((slot_of(&m, 17), slot_of(&m, 33)), (1, 2));
        assert_eq!(m.keys[3], EMPTY_KEY);
    }

    #[test]
    fn cluster_rehash_wraps_around() {
        let mut m = IntHashTable::new();
        m.set(15, 1u8);
        m.set(31, 2);
        m.set(47, 3);
        assert!(m.remove(15));
        assert_eq!((slot_of(&m, 31), slot_of(&m, 47)), (15, 0));
        assert_eq!(m.get(47), Ok(&3));
    }

    #[test]
    fn full_table_miss_terminates() {
        let mut m = IntHashTable::with_capacity_and_load_factor(2, 1.0).unwrap();
        m.set(1, 1);
        m.set(3, 3);
        assert_eq!(m.capacity(), 2);
        assert!(!m.contains_key(5));
        assert_eq!(m.get(5), Err(LookupError::KeyNotFound));
    }

    #[test]
    fn empty_key_is_never_found() {
        let mut m = IntHashTable::new();
        m.set(16, ());
        assert!(!m.contains_key(EMPTY_KEY));
        assert!(!m.remove(EMPTY_KEY));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "marks empty slots")]
    fn storing_empty_key_panics_in_debug() {
        let mut m = IntHashTable::new();
        m.set(EMPTY_KEY, 1);
    }

    #[test]
    fn iter_and_debug() {
        let mut m = IntHashTable::new();
        m.set(2, 20);
        m.set(1, 10);
        let mut pairs: Vec<_> = m.iter().map(|(k, &v)| (k, v)).collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![(1, 10), (2, 20)]);
        assert_eq!(format!("{:?}", m), "{1: 10, 2: 20}");
    }
}
