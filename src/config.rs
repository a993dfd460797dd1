//! Construction parameters for the hash tables.

use crate::capacity::slot_count;
use crate::error::ConfigError;

/// Initial table capacity when none is given.
pub const DEFAULT_CAPACITY: usize = 16;

/// Fraction of slots that may be filled before a table grows.
pub const DEFAULT_LOAD_FACTOR: f32 = 0.75;

/// Initial queue capacity when none is given.
pub const DEFAULT_QUEUE_CAPACITY: usize = 4;

/// Builder for table capacity and load factor.
///
/// ```
/// use celerity::{HashTable, TableConfig, WangNaive};
///
/// let cfg = TableConfig::new().capacity(100).load_factor(0.5);
/// let table: HashTable<i32, u64, WangNaive> = HashTable::with_config(cfg).unwrap();
/// assert_eq!(table.capacity(), 128);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    capacity: usize,
    load_factor: f32,
}

impl TableConfig {
    pub const fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    /// Requested initial capacity; rounded up to a power of two on use.
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub const fn load_factor(mut self, load_factor: f32) -> Self {
        self.load_factor = load_factor;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // NaN fails both comparisons.
        if self.load_factor > 0.0 && self.load_factor <= 1.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidLoadFactor(self.load_factor))
        }
    }

    /// Validated `(slots, load_factor)` pair.
    pub(crate) fn resolve(&self) -> Result<(usize, f32), ConfigError> {
        self.validate()?;
        Ok((slot_count(self.capacity), self.load_factor))
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// `floor(slots * load_factor)`.
#[inline]
pub(crate) fn threshold_for(slots: usize, load_factor: f32) -> usize {
    (slots as f64 * load_factor as f64) as usize
}
