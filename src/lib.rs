//! celerity: allocation-lean open-addressing hash tables and a growable
//! circular queue, with a family of fast 32-bit hash strategies.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: drop-in containers for hot, single-threaded paths where a
//!   general-purpose map or queue spends too much on hashing, boxing or
//!   per-entry allocation.
//! - Layers:
//!   - `capacity`: power-of-two rounding shared by every container.
//!   - `hashing`: stateless `HashStrategy` implementations (Wang-naive,
//!     Murmur3 finalizer, SpookyHash short end, FNV-1a).
//!   - `HashTable<K, V, H>`: linear-probing map over parallel key/value
//!     arrays, hash strategy chosen by type parameter.
//!   - `IntHashTable<V>`: the same algorithm specialized to `i32` keys.
//!   - `CircularQueue<T>`: ring-buffer FIFO that doubles when full.
//!
//! Constraints
//! - Single-threaded: no locks, no atomics. Containers are `Send`/`Sync`
//!   when their contents are; wrap them in a lock to share them.
//! - Capacities are powers of two so slot indices are a bitmask away.
//! - No per-entry heap allocations beyond the containers' own arrays.
//!
//! Empty slots and the reserved key
//! - A table slot is empty when its key equals the key type's default
//!   (`0` for `IntHashTable`). That key can never be stored. There is no
//!   occupancy bitmap and no tombstone.
//! - Storing the reserved key is a caller contract violation; debug builds
//!   assert, release builds silently lose the entry.
//!
//! Growth
//! - A table grows before any `set` that finds `len() >= threshold`, where
//!   `threshold = floor(capacity * load_factor)`. Growth doubles the arrays
//!   and re-inserts every entry. Capacity never shrinks.
//! - A queue grows when an enqueue finds it full, linearizing the ring so
//!   the front element lands at index 0.
//!
//! Removal without tombstones
//! - `remove` empties the slot and then re-inserts every entry of the
//!   cluster that follows it, up to the next empty slot. Each re-inserted
//!   entry probes from its own home slot again, so no live key is ever
//!   hidden behind an empty slot.
//!
//! Notes and non-goals
//! - No iteration order guarantees.
//! - The hash strategies are not resistant to adversarial keys.
//! - No serialization.

pub mod capacity;
pub mod circular_queue;
pub mod config;
pub mod error;
pub mod hash_table;
mod hash_table_proptest;
pub mod hashing;
pub mod int_hash_table;
mod int_hash_table_proptest;

// Public surface
pub use capacity::next_power_of_two;
pub use circular_queue::CircularQueue;
pub use config::TableConfig;
pub use error::{ConfigError, HashError, LookupError, QueueError};
pub use hash_table::HashTable;
pub use hashing::{Fnv1a, HashStrategy, Murmur3, Spooky, WangNaive};
pub use int_hash_table::IntHashTable;
