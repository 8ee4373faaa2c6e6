//! # LRU (Least Recently Used) Cache
//!
//! Evicts the entry that has gone longest without an access. Accesses are
//! `get`, `insert` over an existing key, and explicit `touch`.
//!
//! ## Architecture
//!
//! ```text
//!   ┌───────────────────────────────────────────────────────────────┐
//!   │                        LruCache<K, V>                         │
//!   │                                                               │
//!   │   index: FxHashMap<K, NodeRef>        order: OrderList        │
//!   │   ┌──────────┬─────────┐                                      │
//!   │   │   Key    │ NodeRef │      front ─► [k3] ◄─► [k1] ◄─► [k2] │
//!   │   │  k1      │  id_1   │──┐     │                          ▲  │
//!   │   │  k2      │  id_2   │  └───► │  least recent     most   │  │
//!   │   │  k3      │  id_3   │        ▼  (evict next)     recent ┘  │
//!   │   └──────────┴─────────┘                                      │
//!   └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every access unlinks the entry's node and re-links it at the back of the
//! list, so list position is recency order. Eviction pops the front. The
//! index and the list always describe the same set of entries; both are
//! updated inside every mutating operation.
//!
//! ## Performance
//!
//! | Operation              | Time | Notes                            |
//! |------------------------|------|----------------------------------|
//! | `get`                  | O(1) | index lookup + move_to_back      |
//! | `insert` (no eviction) | O(1) | push_back + index insert         |
//! | `insert` (eviction)    | O(1) | pop_front + index remove         |
//! | `remove` / `pop_lru`   | O(1) | handle-based unlink              |
//! | `recency_rank`         | O(n) | diagnostic scan                  |
//!
//! ## Thread Safety
//!
//! `LruCache` is not thread-safe; wrap it in one exclusive lock, or use
//! [`ConcurrentLruCache`] (feature `concurrency`), which holds a
//! `parking_lot::RwLock` around the whole cache and shares values as
//! `Arc<V>`.

use std::hash::Hash;

#[cfg(feature = "concurrency")]
use std::fmt;
#[cfg(feature = "concurrency")]
use std::sync::Arc;

#[cfg(feature = "concurrency")]
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::ds::order_list::OrderList;
use crate::ds::slot_arena::NodeRef;
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, MetricsSnapshotProvider,
};
#[cfg(feature = "concurrency")]
use crate::traits::ConcurrentCache;
use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Fixed-capacity cache with least-recently-used eviction.
///
/// # Example
///
/// ```
/// use bicache::policy::lru::LruCache;
/// use bicache::traits::CoreCache;
///
/// let mut cache = LruCache::new(2);
/// cache.insert(1, 10);
/// cache.insert(2, 20);
///
/// // Reading key 1 refreshes it; key 2 becomes the victim.
/// assert_eq!(cache.get(&1), Some(&10));
/// cache.insert(3, 30);
///
/// assert!(cache.contains(&1));
/// assert!(!cache.contains(&2));
/// assert!(cache.contains(&3));
/// ```
#[derive(Debug)]
pub struct LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    index: FxHashMap<K, NodeRef>,
    order: OrderList<Entry<K, V>>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_new`](Self::try_new) to handle
    /// the error instead.
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(cache) => cache,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a cache holding at most `capacity` entries, rejecting a zero
    /// capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use bicache::policy::lru::LruCache;
    ///
    /// assert!(LruCache::<u64, i32>::try_new(8).is_ok());
    /// assert!(LruCache::<u64, i32>::try_new(0).is_err());
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be greater than zero"));
        }
        Ok(Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order: OrderList::with_capacity(capacity),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        })
    }

    /// Read-only lookup that does not refresh recency.
    ///
    /// # Example
    ///
    /// ```
    /// use bicache::policy::lru::LruCache;
    /// use bicache::traits::CoreCache;
    ///
    /// let mut cache = LruCache::new(2);
    /// cache.insert(1, "first");
    /// cache.insert(2, "second");
    ///
    /// // Peek leaves key 1 as the eviction victim.
    /// assert_eq!(cache.peek(&1), Some(&"first"));
    /// cache.insert(3, "third");
    /// assert!(!cache.contains(&1));
    /// ```
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.order.get(id).map(|entry| &entry.value)
    }

    /// Iterates entries from least to most recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.order.iter().map(|entry| (&entry.key, &entry.value))
    }

    /// Verifies that the index and the recency list describe the same set of
    /// entries within the capacity bound. Intended for tests and debugging.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.order.len() > self.capacity {
            return Err(InvariantError::new("entry count exceeds capacity"));
        }
        if self.index.len() != self.order.len() {
            return Err(InvariantError::new("index and order list sizes diverge"));
        }
        for (id, entry) in self.order.iter_entries() {
            match self.index.get(&entry.key) {
                Some(&indexed) if indexed == id => {}
                Some(_) => {
                    return Err(InvariantError::new("index points at a different node"));
                }
                None => return Err(InvariantError::new("listed key missing from index")),
            }
        }
        Ok(())
    }
}

impl<K, V> CoreCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            let previous = {
                let entry = self.order.get_mut(id).expect("lru entry missing");
                std::mem::replace(&mut entry.value, value)
            };
            self.order.move_to_back(id);
            return Some(previous);
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if self.index.len() == self.capacity {
            #[cfg(feature = "metrics")]
            self.metrics.record_evict_call();

            if let Some(victim) = self.order.pop_front() {
                self.index.remove(&victim.key);
                #[cfg(feature = "metrics")]
                self.metrics.record_evicted_entry();
            }
        }

        let id = self.order.push_back(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);
        None
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            }
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.order.move_to_back(id);
        self.order.get(id).map(|entry| &entry.value)
    }

    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
        self.index.clear();
        self.order.clear();
    }
}

impl<K, V> MutableCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        self.order.remove(id).map(|entry| entry.value)
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn pop_lru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_call();

        let victim = self.order.pop_front()?;
        self.index.remove(&victim.key);

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_found();

        Some((victim.key, victim.value))
    }

    fn peek_lru(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_lru_call();

        let entry = self.order.front()?;

        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_lru_found();

        Some((&entry.key, &entry.value))
    }

    fn touch(&mut self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        if let Some(&id) = self.index.get(key) {
            self.order.move_to_back(id);

            #[cfg(feature = "metrics")]
            self.metrics.record_touch_found();

            true
        } else {
            false
        }
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_recency_rank_call();

        let &target = self.index.get(key)?;
        for (position, (id, _)) in self.order.iter_entries().enumerate() {
            #[cfg(feature = "metrics")]
            (&self.metrics).record_recency_rank_scan_step();

            if id == target {
                #[cfg(feature = "metrics")]
                (&self.metrics).record_recency_rank_found();

                // Front of the list is the oldest entry; rank 0 is the newest.
                return Some(self.order.len() - 1 - position);
            }
        }
        None
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        LruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            pop_lru_calls: self.metrics.pop_lru_calls,
            pop_lru_found: self.metrics.pop_lru_found,
            touch_calls: self.metrics.touch_calls,
            touch_found: self.metrics.touch_found,
            peek_lru_calls: self.metrics.peek_lru_calls.get(),
            peek_lru_found: self.metrics.peek_lru_found.get(),
            recency_rank_calls: self.metrics.recency_rank_calls.get(),
            recency_rank_found: self.metrics.recency_rank_found.get(),
            recency_rank_scan_steps: self.metrics.recency_rank_scan_steps.get(),
            cache_len: self.index.len(),
            capacity: self.capacity,
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

// ---------------------------------------------------------------------------
// ConcurrentLruCache
// ---------------------------------------------------------------------------

/// Thread-safe LRU cache sharing values as `Arc<V>`.
///
/// A single `RwLock` guards the index and the recency list together, so they
/// mutate as a unit. Reads still take the write lock because a hit reorders
/// the list.
///
/// # Example
///
/// ```
/// use bicache::policy::lru::ConcurrentLruCache;
///
/// let cache: ConcurrentLruCache<u32, String> = ConcurrentLruCache::new(100);
/// cache.insert(1, "data".to_string());
///
/// let value = cache.get(&1).unwrap();
/// assert_eq!(*value, "data");
/// ```
#[cfg(feature = "concurrency")]
pub struct ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    inner: Arc<RwLock<LruCache<K, Arc<V>>>>,
}

#[cfg(feature = "concurrency")]
impl<K, V> Clone for ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> fmt::Debug for ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.read();
        f.debug_struct("ConcurrentLruCache")
            .field("len", &cache.len())
            .field("capacity", &cache.capacity())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
    /// Creates a thread-safe LRU cache with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }

    /// Fallible constructor rejecting a zero capacity.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: Arc::new(RwLock::new(LruCache::try_new(capacity)?)),
        })
    }

    /// Inserts a value, wrapping it in `Arc<V>` internally.
    ///
    /// Returns the previous `Arc<V>` if the key existed.
    pub fn insert(&self, key: K, value: V) -> Option<Arc<V>> {
        let mut cache = self.inner.write();
        cache.insert(key, Arc::new(value))
    }

    /// Inserts an already-shared `Arc<V>` without re-wrapping.
    ///
    /// # Example
    ///
    /// ```
    /// use bicache::policy::lru::ConcurrentLruCache;
    /// use std::sync::Arc;
    ///
    /// let cache: ConcurrentLruCache<u32, String> = ConcurrentLruCache::new(10);
    /// let shared = Arc::new("shared".to_string());
    /// cache.insert_arc(1, Arc::clone(&shared));
    ///
    /// let retrieved = cache.get(&1).unwrap();
    /// assert!(Arc::ptr_eq(&shared, &retrieved));
    /// ```
    pub fn insert_arc(&self, key: K, value: Arc<V>) -> Option<Arc<V>> {
        let mut cache = self.inner.write();
        cache.insert(key, value)
    }

    /// Gets a value by key, refreshing its recency.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        let mut cache = self.inner.write();
        cache.get(key).map(Arc::clone)
    }

    /// Read-only lookup that does not refresh recency.
    pub fn peek(&self, key: &K) -> Option<Arc<V>> {
        let cache = self.inner.read();
        cache.peek(key).map(Arc::clone)
    }

    /// Marks an entry as recently used without retrieving the value.
    pub fn touch(&self, key: &K) -> bool {
        let mut cache = self.inner.write();
        cache.touch(key)
    }

    /// Removes a key, returning its value if present.
    pub fn remove(&self, key: &K) -> Option<Arc<V>> {
        let mut cache = self.inner.write();
        cache.remove(key)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&self) -> Option<(K, Arc<V>)> {
        let mut cache = self.inner.write();
        cache.pop_lru()
    }

    /// Checks if a key exists without updating recency.
    pub fn contains(&self, key: &K) -> bool {
        let cache = self.inner.read();
        cache.contains(key)
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        let cache = self.inner.read();
        cache.len()
    }

    /// Returns `true` if the cache is empty.
    pub fn is_empty(&self) -> bool {
        let cache = self.inner.read();
        cache.is_empty()
    }

    /// Returns the maximum capacity.
    pub fn capacity(&self) -> usize {
        let cache = self.inner.read();
        cache.capacity()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        let mut cache = self.inner.write();
        cache.clear();
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentCache for ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
}
