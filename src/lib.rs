//! bicache: fixed-capacity in-memory caches with O(1) eviction.
//!
//! Two policies are provided, built from the same handle-based list
//! primitives in [`ds`]:
//!
//! - [`policy::lru::LruCache`]: evicts the least recently used entry.
//! - [`policy::lfu::LfuCache`]: evicts the least frequently used entry,
//!   breaking ties by recency among entries at the minimum frequency.
//!
//! Both caches keep a hash index and one or more ordered lists over the same
//! set of entries; every operation updates both views together so they never
//! diverge. All operations are O(1).

pub mod ds;
pub mod error;
pub mod policy;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
