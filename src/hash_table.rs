//! HashTable: open-addressing map with linear probing and a pluggable hash strategy.

use crate::capacity::slot_count;
use crate::config::{threshold_for, TableConfig, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR};
use crate::error::{ConfigError, LookupError};
use crate::hashing::HashStrategy;
use core::borrow::Borrow;
use core::fmt;
use core::mem;
use tracing::{debug, trace};

/// Open-addressing map over parallel key/value slot arrays.
///
/// A slot is empty when its key equals `K::default()`. That value is reserved
/// and must never be stored as a live key: it would be indistinguishable from
/// an empty slot. Debug builds assert on it; release builds do not check.
///
/// Lookups through a borrowed form `Q` require `H` to hash `Q` exactly as it
/// hashes the owned `K`.
pub struct HashTable<K, V, H> {
    keys: Box<[K]>,
    values: Box<[V]>,
    count: usize,
    threshold: usize,
    load_factor: f32,
    empty: K,
    hasher: H,
}

impl<K, V, H> HashTable<K, V, H>
where
    K: Eq + Default,
    V: Default,
    H: HashStrategy<K>,
{
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Table with at least `capacity` slots and the default load factor.
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
            keys: vacant(slots),
            values: vacant(slots),
            count: 0,
            threshold: threshold_for(slots, load_factor),
            load_factor,
            empty: K::default(),
            hasher: H::default(),
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

    #[inline]
    fn mask(&self) -> usize {
        self.keys.len() - 1
    }

    #[inline]
    fn home_slot(&self, hash: i32) -> usize {
        (hash as u32 as usize) & self.mask()
    }

    /// Index of the slot holding `key`, if any.
    ///
    /// Stops at the first empty slot, or after one full lap of a table with
    /// no empty slots left.
    fn probe_for_key<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
        H: HashStrategy<Q>,
    {
        let mask = self.mask();
        let mut index = self.home_slot(self.hasher.hash(key));
        for _ in 0..self.keys.len() {
            let slot = &self.keys[index];
            if *slot == self.empty {
                return None;
            }
            if slot.borrow() == key {
                return Some(index);
            }
            index = (index + 1) & mask;
        }
        None
    }

    /// First slot that is empty or already holds `key`.
    ///
    /// Callers guarantee `count < capacity`, so the scan terminates.
    fn probe_for_insert(&self, key: &K) -> usize {
        let mask = self.mask();
        let mut index = self.home_slot(self.hasher.hash(key));
        loop {
            let slot = &self.keys[index];
            if *slot == self.empty || slot == key {
                return index;
            }
            index = (index + 1) & mask;
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Result<&V, LookupError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
        H: HashStrategy<Q>,
    {
        self.probe_for_key(key)
            .map(|i| &self.values[i])
            .ok_or(LookupError::KeyNotFound)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, LookupError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
        H: HashStrategy<Q>,
    {
        match self.probe_for_key(key) {
            Some(i) => Ok(&mut self.values[i]),
            None => Err(LookupError::KeyNotFound),
        }
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
        H: HashStrategy<Q>,
    {
        self.probe_for_key(key).is_some()
    }

    /// Inserts `key -> value`, replacing the value if the key is present.
    ///
    /// Grows the table first once `len() >= threshold`, even when the call
    /// ends up overwriting an existing entry.
    pub fn set(&mut self, key: K, value: V) {
        debug_assert!(
            key != self.empty,
            "the default key marks empty slots and cannot be stored"
        );
        if self.count >= self.threshold {
            self.grow();
        }

        let index = self.probe_for_insert(&key);
        let is_new = self.keys[index] == self.empty;
        self.keys[index] = key;
        self.values[index] = value;
        if is_new {
            self.count += 1;
        }
    }

    /// Removes `key`; returns false if it was not present.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
        H: HashStrategy<Q>,
    {
        let Some(index) = self.probe_for_key(key) else {
            return false;
        };
        let _ = self.take_slot(index);
        self.rehash_cluster_after(index);
        true
    }

    /// Empties slot `index` and returns what it held.
    fn take_slot(&mut self, index: usize) -> (K, V) {
        let key = mem::take(&mut self.keys[index]);
        let value = mem::take(&mut self.values[index]);
        self.count -= 1;
        (key, value)
    }

    /// Re-inserts every entry of the cluster following a freshly emptied slot.
    ///
    /// Each entry restarts probing from its own home slot, so none stays
    /// stranded behind the hole left by the removal.
    fn rehash_cluster_after(&mut self, start: usize) {
        let mask = self.mask();
        let mut index = (start + 1) & mask;
        let mut moved = 0usize;
        while self.keys[index] != self.empty {
            let (key, value) = self.take_slot(index);
            self.set(key, value);
            moved += 1;
            index = (index + 1) & mask;
        }
        if moved > 0 {
            trace!(moved, "rehashed cluster after removal");
        }
    }

    /// Doubles the slot arrays and re-inserts every live entry.
    fn grow(&mut self) {
        let old_capacity = self.keys.len();
        let mut new_capacity = old_capacity * 2;
        // Tiny load factors can leave the doubled threshold at or below count.
        while threshold_for(new_capacity, self.load_factor) <= self.count {
            new_capacity *= 2;
        }

        let old_keys = mem::replace(&mut self.keys, vacant(new_capacity));
        let old_values = mem::replace(&mut self.values, vacant(new_capacity));
        let live = self.count;
        self.threshold = threshold_for(new_capacity, self.load_factor);
        self.count = 0;

        for (key, value) in old_keys.into_vec().into_iter().zip(old_values.into_vec()) {
            if key != self.empty {
                self.set(key, value);
            }
        }
        debug!(old_capacity, new_capacity, live, "hash table grew");
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            it: self.keys.iter().zip(self.values.iter()),
            empty: &self.empty,
        }
    }
}

/// Boxed slice of `len` default values.
pub(crate) fn vacant<T: Default>(len: usize) -> Box<[T]> {
    core::iter::repeat_with(T::default).take(len).collect()
}

impl<K, V, H> Default for HashTable<K, V, H>
where
    K: Eq + Default,
    V: Default,
    H: HashStrategy<K>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, H> fmt::Debug for HashTable<K, V, H>
where
    K: Eq + Default + fmt::Debug,
    V: Default + fmt::Debug,
    H: HashStrategy<K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over live entries in slot order.
pub struct Iter<'a, K, V> {
    it: core::iter::Zip<core::slice::Iter<'a, K>, core::slice::Iter<'a, V>>,
    empty: &'a K,
}

impl<'a, K: Eq, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let empty = self.empty;
        self.it.find(|(k, _)| *k != empty)
    }
}
