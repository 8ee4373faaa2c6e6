//! # LFU (Least Frequently Used) Cache
//!
//! Evicts the entry with the lowest access count when capacity is reached.
//! Ties at the minimum frequency are broken by recency: the least recently
//! touched of the tied entries loses.
//!
//! ## Architecture
//!
//! ```text
//!   ┌────────────────────────────────────────────────────────────────────┐
//!   │                          LfuCache<K, V>                            │
//!   │                                                                    │
//!   │   index: FxHashMap<K, EntryLoc { freq, id }>                       │
//!   │                                                                    │
//!   │   buckets: FxHashMap<u64, FreqBucket>   min_freq = 1               │
//!   │        │                                    │                      │
//!   │        ▼                                    ▼                      │
//!   │   freq=1: front ─► [b] ◄─► [c] ◄─ back   (recency order)           │
//!   │             evict first      most recent                           │
//!   │   freq=3: front ─► [a] ◄─ back                                     │
//!   │                                                                    │
//!   │   bucket chain: freq=1 ──next──► freq=3                            │
//!   │                 freq=3 ◄──prev── freq=1                            │
//!   └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each occupied frequency holds its own `OrderList`; the buckets link to
//! their occupied neighbors so the minimum can be maintained without ever
//! scanning. Empty buckets are unlinked immediately, which keeps `min_freq`
//! pointing at a non-empty bucket whenever the cache holds anything.
//!
//! ## Access Flow
//!
//! ```text
//!   get(&key) hit:
//!     1. Look up (freq, id) in the index
//!     2. Unlink the node from buckets[freq]
//!     3. Bucket emptied? unlink it; min_freq follows the chain
//!     4. Push the node at the back of buckets[freq + 1] (created on demand)
//!     5. Re-index the fresh handle
//!
//!   insert(new key) at capacity:
//!     1. Pop the front of buckets[min_freq]  (LFU victim, LRU tie-break)
//!     2. Remove the victim from the index
//!     3. Push the new node into buckets[1]
//!     4. min_freq = 1  (a fresh entry is by definition the minimum)
//! ```
//!
//! `min_freq` is only ever written in two places: the empty-bucket unlink
//! (plus the follow-up when a node lands in a lower bucket) and the
//! insert-resets-to-1 rule. Everything else reads it.
//!
//! ## Frequency Lifecycle
//!
//! New entries start at 1. Every `get` hit, `insert` over the key, and
//! `increment_frequency` adds exactly 1, saturating at `u64::MAX` (the entry
//! then just refreshes its recency inside the top bucket).
//! `reset_frequency` drops an entry back to 1.
//!
//! ## LFU vs LRU
//!
//! ```text
//!   Access pattern: A, B, A, C, A, D  (capacity 3)
//!
//!   LRU keeps the 3 most recently touched: {A, C, D}, then B's slot churns.
//!   LFU keeps A pinned by its count:       {A:3, ...} and the freq-1 keys
//!   churn among themselves.
//! ```
//!
//! ## Thread Safety
//!
//! `LfuCache` is not thread-safe; use [`ConcurrentLfuCache`] (feature
//! `concurrency`) or an external lock guarding the whole cache.

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
use crate::metrics::metrics_impl::LfuMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LfuMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, LfuMetricsReadRecorder, LfuMetricsRecorder, MetricsSnapshotProvider,
};
#[cfg(feature = "concurrency")]
use crate::traits::ConcurrentCache;
use crate::traits::{CoreCache, LfuCacheTrait, MutableCache};

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    freq: u64,
}

/// Where an entry currently lives: its frequency bucket and its node handle
/// inside that bucket's list.
#[derive(Debug, Clone, Copy)]
struct EntryLoc {
    freq: u64,
    id: NodeRef,
}

#[derive(Debug)]
struct FreqBucket<K, V> {
    list: OrderList<Entry<K, V>>,
    prev: Option<u64>,
    next: Option<u64>,
}

/// Fixed-capacity cache with least-frequently-used eviction and LRU
/// tie-breaking.
///
/// # Example
///
/// ```
/// use bicache::policy::lfu::LfuCache;
/// use bicache::traits::{CoreCache, LfuCacheTrait};
///
/// let mut cache = LfuCache::new(2);
/// cache.insert(1, 10);
/// cache.insert(2, 20);
///
/// // Key 1 reaches frequency 2; key 2 stays at 1 and is evicted.
/// cache.get(&1);
/// cache.insert(3, 30);
///
/// assert!(cache.contains(&1));
/// assert!(!cache.contains(&2));
/// assert_eq!(cache.frequency(&1), Some(2));
/// assert_eq!(cache.frequency(&3), Some(1));
/// ```
#[derive(Debug)]
pub struct LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    index: FxHashMap<K, EntryLoc>,
    buckets: FxHashMap<u64, FreqBucket<K, V>>,
    /// Smallest occupied frequency; 0 when the cache is empty.
    min_freq: u64,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LfuMetrics,
}

impl<K, V> LfuCache<K, V>
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
    /// use bicache::policy::lfu::LfuCache;
    ///
    /// assert!(LfuCache::<u64, i32>::try_new(8).is_ok());
    /// assert!(LfuCache::<u64, i32>::try_new(0).is_err());
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be greater than zero"));
        }
        Ok(Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            buckets: FxHashMap::default(),
            min_freq: 0,
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LfuMetrics::default(),
        })
    }

    /// Read-only lookup that does not bump the frequency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let loc = *self.index.get(key)?;
        self.buckets
            .get(&loc.freq)?
            .list
            .get(loc.id)
            .map(|entry| &entry.value)
    }

    /// Smallest occupied frequency, or `None` when the cache is empty.
    pub fn min_frequency(&self) -> Option<u64> {
        (self.min_freq != 0).then_some(self.min_freq)
    }

    /// Links an empty bucket for `freq` between `prev` and `next`.
    fn link_bucket(&mut self, freq: u64, prev: Option<u64>, next: Option<u64>) {
        self.buckets.insert(
            freq,
            FreqBucket {
                list: OrderList::new(),
                prev,
                next,
            },
        );
        if let Some(prev_freq) = prev
            && let Some(bucket) = self.buckets.get_mut(&prev_freq)
        {
            bucket.next = Some(freq);
        }
        if let Some(next_freq) = next
            && let Some(bucket) = self.buckets.get_mut(&next_freq)
        {
            bucket.prev = Some(freq);
        }
    }

    /// Unlinks the emptied bucket for `freq` and repoints `min_freq` at the
    /// chain successor when the minimum bucket is the one going away.
    fn unlink_bucket(&mut self, freq: u64, prev: Option<u64>, next: Option<u64>) {
        if let Some(prev_freq) = prev
            && let Some(bucket) = self.buckets.get_mut(&prev_freq)
        {
            bucket.next = next;
        }
        if let Some(next_freq) = next
            && let Some(bucket) = self.buckets.get_mut(&next_freq)
        {
            bucket.prev = prev;
        }
        self.buckets.remove(&freq);
        if self.min_freq == freq {
            self.min_freq = next.unwrap_or(0);
        }
    }

    /// Moves the entry at `loc` into the `new_freq` bucket and returns its
    /// new location. `new_freq` is either `loc.freq + 1` (bump) or 1 (reset).
    fn move_to_freq(&mut self, loc: EntryLoc, new_freq: u64) -> EntryLoc {
        let old_freq = loc.freq;
        let (bucket_prev, bucket_next) = {
            let bucket = self.buckets.get(&old_freq).expect("lfu bucket missing");
            (bucket.prev, bucket.next)
        };
        let mut entry = self
            .buckets
            .get_mut(&old_freq)
            .expect("lfu bucket missing")
            .list
            .remove(loc.id)
            .expect("lfu entry missing");
        let emptied = self
            .buckets
            .get(&old_freq)
            .is_none_or(|bucket| bucket.list.is_empty());
        if emptied {
            self.unlink_bucket(old_freq, bucket_prev, bucket_next);
        }

        if !self.buckets.contains_key(&new_freq) {
            let (prev, next) = if new_freq > old_freq {
                // Bump by one: slot between the old bucket and its successor.
                let prev = if emptied { bucket_prev } else { Some(old_freq) };
                (prev, bucket_next)
            } else {
                // Reset to 1: in front of whatever the minimum is now.
                (None, (self.min_freq != 0).then_some(self.min_freq))
            };
            self.link_bucket(new_freq, prev, next);
        }

        entry.freq = new_freq;
        let id = self
            .buckets
            .get_mut(&new_freq)
            .expect("lfu bucket missing")
            .list
            .push_back(entry);
        if self.min_freq == 0 || new_freq < self.min_freq {
            self.min_freq = new_freq;
        }
        EntryLoc { freq: new_freq, id }
    }

    /// Counts an access for `key`: frequency + 1, recency refreshed.
    /// Returns the resulting frequency, or `None` on a miss.
    fn bump(&mut self, key: &K) -> Option<u64> {
        let loc = *self.index.get(key)?;
        if loc.freq == u64::MAX {
            // Saturated; just refresh recency inside the top bucket.
            let bucket = self.buckets.get_mut(&loc.freq).expect("lfu bucket missing");
            bucket.list.move_to_back(loc.id);
            return Some(loc.freq);
        }
        let new_loc = self.move_to_freq(loc, loc.freq + 1);
        if let Some(slot) = self.index.get_mut(key) {
            *slot = new_loc;
        }
        Some(new_loc.freq)
    }

    /// Removes the front of the minimum-frequency bucket: the least
    /// frequently used entry, least recently touched among ties.
    fn evict_min(&mut self) -> Option<(K, V)> {
        let freq = self.min_freq;
        if freq == 0 {
            return None;
        }
        let (bucket_prev, bucket_next) = {
            let bucket = self.buckets.get(&freq)?;
            (bucket.prev, bucket.next)
        };
        let entry = self.buckets.get_mut(&freq)?.list.pop_front()?;
        let emptied = self
            .buckets
            .get(&freq)
            .is_none_or(|bucket| bucket.list.is_empty());
        if emptied {
            self.unlink_bucket(freq, bucket_prev, bucket_next);
        }
        self.index.remove(&entry.key);
        Some((entry.key, entry.value))
    }

    /// Verifies that the index, the frequency buckets, and the minimum
    /// pointer all describe the same set of entries. Intended for tests and
    /// debugging.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() > self.capacity {
            return Err(InvariantError::new("entry count exceeds capacity"));
        }

        if self.index.is_empty() {
            if self.min_freq != 0 {
                return Err(InvariantError::new("min frequency set on empty cache"));
            }
            if !self.buckets.is_empty() {
                return Err(InvariantError::new("empty cache holds buckets"));
            }
            return Ok(());
        }

        if self.min_freq == 0 || !self.buckets.contains_key(&self.min_freq) {
            return Err(InvariantError::new(
                "min frequency does not name an occupied bucket",
            ));
        }

        let mut total = 0usize;
        for (&freq, bucket) in &self.buckets {
            if bucket.list.is_empty() {
                return Err(InvariantError::new("empty bucket left in the chain"));
            }

            match bucket.prev {
                Some(prev) if prev >= freq => {
                    return Err(InvariantError::new("bucket chain is not ascending"));
                }
                Some(prev) if self.buckets.get(&prev).map(|b| b.next) != Some(Some(freq)) => {
                    return Err(InvariantError::new("bucket chain links disagree"));
                }
                None if self.min_freq != freq => {
                    return Err(InvariantError::new("chain head is not the minimum"));
                }
                _ => {}
            }
            if let Some(next) = bucket.next {
                if next <= freq {
                    return Err(InvariantError::new("bucket chain is not ascending"));
                }
                if self.buckets.get(&next).map(|b| b.prev) != Some(Some(freq)) {
                    return Err(InvariantError::new("bucket chain links disagree"));
                }
            }

            for (id, entry) in bucket.list.iter_entries() {
                if entry.freq != freq {
                    return Err(InvariantError::new("entry frequency disagrees with bucket"));
                }
                match self.index.get(&entry.key) {
                    Some(loc) if loc.freq == freq && loc.id == id => {}
                    Some(_) => {
                        return Err(InvariantError::new("index points at a different node"));
                    }
                    None => return Err(InvariantError::new("listed key missing from index")),
                }
                total += 1;
            }
        }
        if total != self.index.len() {
            return Err(InvariantError::new("index and bucket sizes diverge"));
        }
        Ok(())
    }
}

impl<K, V> CoreCache<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(loc) = self.index.get(&key).copied() {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            let previous = {
                let entry = self
                    .buckets
                    .get_mut(&loc.freq)
                    .expect("lfu bucket missing")
                    .list
                    .get_mut(loc.id)
                    .expect("lfu entry missing");
                std::mem::replace(&mut entry.value, value)
            };
            // An update counts as an access, same as a get.
            self.bump(&key);
            return Some(previous);
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if self.index.len() == self.capacity {
            #[cfg(feature = "metrics")]
            self.metrics.record_evict_call();

            if self.evict_min().is_some() {
                #[cfg(feature = "metrics")]
                self.metrics.record_evicted_entry();
            }
        }

        if !self.buckets.contains_key(&1) {
            let next = (self.min_freq != 0).then_some(self.min_freq);
            self.link_bucket(1, None, next);
        }
        let id = self
            .buckets
            .get_mut(&1)
            .expect("lfu bucket missing")
            .list
            .push_back(Entry {
                key: key.clone(),
                value,
                freq: 1,
            });
        self.index.insert(key, EntryLoc { freq: 1, id });
        // A fresh entry always establishes frequency 1 as the minimum.
        self.min_freq = 1;
        None
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        let new_freq = match self.bump(key) {
            Some(freq) => freq,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            }
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        let loc = *self.index.get(key).expect("lfu index entry missing");
        debug_assert_eq!(loc.freq, new_freq);
        self.buckets
            .get(&loc.freq)
            .expect("lfu bucket missing")
            .list
            .get(loc.id)
            .map(|entry| &entry.value)
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
        self.buckets.clear();
        self.min_freq = 0;
    }
}

impl<K, V> MutableCache<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        let loc = self.index.remove(key)?;
        let (bucket_prev, bucket_next) = {
            let bucket = self.buckets.get(&loc.freq)?;
            (bucket.prev, bucket.next)
        };
        let entry = self.buckets.get_mut(&loc.freq)?.list.remove(loc.id)?;
        let emptied = self
            .buckets
            .get(&loc.freq)
            .is_none_or(|bucket| bucket.list.is_empty());
        if emptied {
            self.unlink_bucket(loc.freq, bucket_prev, bucket_next);
        }
        Some(entry.value)
    }
}

impl<K, V> LfuCacheTrait<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn pop_lfu(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lfu_call();

        let result = self.evict_min();

        #[cfg(feature = "metrics")]
        if result.is_some() {
            self.metrics.record_pop_lfu_found();
        }

        result
    }

    fn peek_lfu(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_lfu_call();

        let bucket = self.buckets.get(&self.min_freq)?;
        let entry = bucket.list.front()?;

        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_lfu_found();

        Some((&entry.key, &entry.value))
    }

    fn frequency(&self, key: &K) -> Option<u64> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_frequency_call();

        let result = self.index.get(key).map(|loc| loc.freq);

        #[cfg(feature = "metrics")]
        if result.is_some() {
            (&self.metrics).record_frequency_found();
        }

        result
    }

    fn reset_frequency(&mut self, key: &K) -> Option<u64> {
        #[cfg(feature = "metrics")]
        self.metrics.record_reset_frequency_call();

        let loc = *self.index.get(key)?;
        let previous = loc.freq;
        if previous != 1 {
            let new_loc = self.move_to_freq(loc, 1);
            if let Some(slot) = self.index.get_mut(key) {
                *slot = new_loc;
            }
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_reset_frequency_found();

        Some(previous)
    }

    fn increment_frequency(&mut self, key: &K) -> Option<u64> {
        #[cfg(feature = "metrics")]
        self.metrics.record_increment_frequency_call();

        let result = self.bump(key);

        #[cfg(feature = "metrics")]
        if result.is_some() {
            self.metrics.record_increment_frequency_found();
        }

        result
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn metrics_snapshot(&self) -> LfuMetricsSnapshot {
        LfuMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            pop_lfu_calls: self.metrics.pop_lfu_calls,
            pop_lfu_found: self.metrics.pop_lfu_found,
            reset_frequency_calls: self.metrics.reset_frequency_calls,
            reset_frequency_found: self.metrics.reset_frequency_found,
            increment_frequency_calls: self.metrics.increment_frequency_calls,
            increment_frequency_found: self.metrics.increment_frequency_found,
            peek_lfu_calls: self.metrics.peek_lfu_calls.get(),
            peek_lfu_found: self.metrics.peek_lfu_found.get(),
            frequency_calls: self.metrics.frequency_calls.get(),
            frequency_found: self.metrics.frequency_found.get(),
            cache_len: self.index.len(),
            capacity: self.capacity,
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LfuMetricsSnapshot> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LfuMetricsSnapshot {
        self.metrics_snapshot()
    }
}

// ---------------------------------------------------------------------------
// ConcurrentLfuCache
// ---------------------------------------------------------------------------

/// Thread-safe LFU cache sharing values as `Arc<V>`.
///
/// One `RwLock` guards the index, the frequency buckets, and the minimum
/// pointer together, so they always mutate as a unit.
///
/// # Example
///
/// ```
/// use bicache::policy::lfu::ConcurrentLfuCache;
///
/// let cache: ConcurrentLfuCache<u32, String> = ConcurrentLfuCache::new(100);
/// cache.insert(1, "data".to_string());
/// cache.get(&1);
///
/// assert_eq!(cache.frequency(&1), Some(2));
/// ```
#[cfg(feature = "concurrency")]
pub struct ConcurrentLfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    inner: Arc<RwLock<LfuCache<K, Arc<V>>>>,
}

#[cfg(feature = "concurrency")]
impl<K, V> Clone for ConcurrentLfuCache<K, V>
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
impl<K, V> fmt::Debug for ConcurrentLfuCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.read();
        f.debug_struct("ConcurrentLfuCache")
            .field("len", &cache.len())
            .field("capacity", &cache.capacity())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentLfuCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
    /// Creates a thread-safe LFU cache with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(LfuCache::new(capacity))),
        }
    }

    /// Fallible constructor rejecting a zero capacity.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: Arc::new(RwLock::new(LfuCache::try_new(capacity)?)),
        })
    }

    /// Inserts a value, wrapping it in `Arc<V>` internally.
    pub fn insert(&self, key: K, value: V) -> Option<Arc<V>> {
        let mut cache = self.inner.write();
        cache.insert(key, Arc::new(value))
    }

    /// Inserts an already-shared `Arc<V>` without re-wrapping.
    pub fn insert_arc(&self, key: K, value: Arc<V>) -> Option<Arc<V>> {
        let mut cache = self.inner.write();
        cache.insert(key, value)
    }

    /// Gets a value by key, incrementing its frequency.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        let mut cache = self.inner.write();
        cache.get(key).map(Arc::clone)
    }

    /// Read-only lookup that does not bump the frequency.
    pub fn peek(&self, key: &K) -> Option<Arc<V>> {
        let cache = self.inner.read();
        cache.peek(key).map(Arc::clone)
    }

    /// Gets the access frequency for a key.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        let cache = self.inner.read();
        cache.frequency(key)
    }

    /// Increments frequency without accessing the value.
    pub fn increment_frequency(&self, key: &K) -> Option<u64> {
        let mut cache = self.inner.write();
        cache.increment_frequency(key)
    }

    /// Resets the frequency counter for a key to 1.
    pub fn reset_frequency(&self, key: &K) -> Option<u64> {
        let mut cache = self.inner.write();
        cache.reset_frequency(key)
    }

    /// Removes a key, returning its value if present.
    pub fn remove(&self, key: &K) -> Option<Arc<V>> {
        let mut cache = self.inner.write();
        cache.remove(key)
    }

    /// Removes and returns the least frequently used entry.
    pub fn pop_lfu(&self) -> Option<(K, Arc<V>)> {
        let mut cache = self.inner.write();
        cache.pop_lfu()
    }

    /// Clones out the current eviction candidate without removing it.
    pub fn peek_lfu(&self) -> Option<(K, Arc<V>)> {
        let cache = self.inner.read();
        cache.peek_lfu().map(|(k, v)| (k.clone(), Arc::clone(v)))
    }

    /// Checks if a key exists without updating frequency.
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
impl<K, V> ConcurrentCache for ConcurrentLfuCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
}
