// ==============================================
// CROSS-POLICY INVARIANT TESTS (integration)
// ==============================================
//
// Tests that verify library-wide behavioral consistency across both cache
// policies. These span multiple modules and belong here rather than in any
// single source file.

use bicache::policy::lfu::LfuCache;
use bicache::policy::lru::LruCache;
use bicache::traits::{CoreCache, LfuCacheTrait, LruCacheTrait, MutableCache};

// ==============================================
// Construction
// ==============================================
//
// A zero capacity can never produce a usable cache: the fallible
// constructors return an error and the plain constructors panic.

mod zero_capacity {
    use super::*;

    #[test]
    fn lru_try_new_rejects_zero() {
        let err = LruCache::<u64, i32>::try_new(0).unwrap_err();
        assert!(
            err.to_string().contains("capacity"),
            "error should name the offending parameter, got: {err}"
        );
    }

    #[test]
    fn lfu_try_new_rejects_zero() {
        let err = LfuCache::<u64, i32>::try_new(0).unwrap_err();
        assert!(err.to_string().contains("capacity"));
    }

    #[test]
    #[should_panic(expected = "capacity")]
    fn lru_new_panics_on_zero() {
        let _ = LruCache::<u64, i32>::new(0);
    }

    #[test]
    #[should_panic(expected = "capacity")]
    fn lfu_new_panics_on_zero() {
        let _ = LfuCache::<u64, i32>::new(0);
    }
}

// ==============================================
// Capacity Bound
// ==============================================

mod capacity_bound {
    use super::*;

    #[test]
    fn lru_never_exceeds_capacity() {
        let mut cache = LruCache::new(8);
        for i in 0..1000u64 {
            cache.insert(i % 50, i);
            assert!(cache.len() <= cache.capacity());
        }
    }

    #[test]
    fn lfu_never_exceeds_capacity() {
        let mut cache = LfuCache::new(8);
        for i in 0..1000u64 {
            cache.insert(i % 50, i);
            if i % 3 == 0 {
                cache.get(&(i % 50));
            }
            assert!(cache.len() <= cache.capacity());
        }
    }

    #[test]
    fn eviction_removes_exactly_one_entry() {
        // Overfilling by one slot removes one victim, even with many entries
        // tied at the minimum frequency.
        let mut cache = LfuCache::new(4);
        for key in 0..4u64 {
            cache.insert(key, key);
        }
        cache.insert(4, 4);
        assert_eq!(cache.len(), 4);
    }
}

// ==============================================
// Miss Semantics
// ==============================================
//
// A miss is a normal return value, not an error, and has no side effects.

mod miss_semantics {
    use super::*;

    #[test]
    fn lru_miss_is_silent() {
        let mut cache = LruCache::<u64, i32>::new(4);
        assert_eq!(cache.get(&99), None);
        assert_eq!(cache.len(), 0);

        cache.insert(1, 10);
        assert_eq!(cache.get(&99), None);
        assert_eq!(cache.recency_rank(&1), Some(0));
    }

    #[test]
    fn lfu_miss_is_silent() {
        let mut cache = LfuCache::<u64, i32>::new(4);
        assert_eq!(cache.get(&99), None);
        assert_eq!(cache.len(), 0);

        cache.insert(1, 10);
        assert_eq!(cache.get(&99), None);
        assert_eq!(cache.frequency(&1), Some(1));
    }
}

// ==============================================
// Eviction Laws (capacity-2 scenarios)
// ==============================================

mod eviction_laws {
    use super::*;

    #[test]
    fn lru_evicts_least_recently_touched() {
        let mut cache = LruCache::new(2);
        cache.insert(1, 10);
        cache.insert(2, 20);
        assert_eq!(cache.get(&1), Some(&10));
        cache.insert(3, 30);

        assert_eq!(cache.peek(&1), Some(&10));
        assert_eq!(cache.peek(&3), Some(&30));
        assert!(!cache.contains(&2));
    }

    #[test]
    fn lfu_evicts_lowest_frequency() {
        let mut cache = LfuCache::new(2);
        cache.insert(1, 10);
        cache.insert(2, 20);
        assert_eq!(cache.get(&1), Some(&10)); // freq(1)=2
        cache.insert(3, 30);

        assert!(!cache.contains(&2));
        assert_eq!(cache.frequency(&1), Some(2));
        assert_eq!(cache.frequency(&3), Some(1));
    }

    #[test]
    fn lfu_tie_breaks_by_recency() {
        let mut cache = LfuCache::new(2);
        cache.insert(1, 10);
        cache.insert(2, 20);
        cache.insert(3, 30);

        // Both victims were at frequency 1; the older insertion loses.
        assert!(!cache.contains(&1));
        assert_eq!(cache.peek(&2), Some(&20));
        assert_eq!(cache.peek(&3), Some(&30));
    }

    #[test]
    fn touched_is_redefined_by_every_access() {
        let mut cache = LruCache::new(3);
        cache.insert(1, 10);
        cache.insert(2, 20);
        cache.insert(3, 30);

        // Re-touch in reverse order; eviction follows the new order.
        cache.get(&3);
        cache.get(&2);
        cache.get(&1);

        assert_eq!(cache.pop_lru(), Some((3, 30)));
        assert_eq!(cache.pop_lru(), Some((2, 20)));
        assert_eq!(cache.pop_lru(), Some((1, 10)));
    }
}

// ==============================================
// Read / Update Stability
// ==============================================

mod stability {
    use super::*;

    #[test]
    fn reads_and_updates_never_change_size() {
        let mut lru = LruCache::new(3);
        let mut lfu = LfuCache::new(3);
        for key in 0..3u64 {
            lru.insert(key, key as i32);
            lfu.insert(key, key as i32);
        }

        for _ in 0..5 {
            lru.get(&0);
            lru.insert(1, 99);
            lfu.get(&0);
            lfu.insert(1, 99);
            assert_eq!(lru.len(), 3);
            assert_eq!(lfu.len(), 3);
        }

        assert_eq!(lru.get(&1), Some(&99));
        assert_eq!(lfu.get(&1), Some(&99));
    }

    #[test]
    fn round_trip_without_intervening_eviction() {
        let mut lru = LruCache::new(2);
        lru.insert("k", vec![1, 2, 3]);
        assert_eq!(lru.get(&"k"), Some(&vec![1, 2, 3]));

        let mut lfu = LfuCache::new(2);
        lfu.insert("k", vec![1, 2, 3]);
        assert_eq!(lfu.get(&"k"), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn remove_is_consistent_across_policies() {
        let mut lru = LruCache::new(4);
        let mut lfu = LfuCache::new(4);
        for key in 0..4u64 {
            lru.insert(key, key);
            lfu.insert(key, key);
        }

        assert_eq!(lru.remove(&2), Some(2));
        assert_eq!(lfu.remove(&2), Some(2));
        assert_eq!(lru.remove(&2), None);
        assert_eq!(lfu.remove(&2), None);
        assert_eq!(lru.len(), 3);
        assert_eq!(lfu.len(), 3);
        assert!(!lru.contains(&2));
        assert!(!lfu.contains(&2));
    }
}

// ==============================================
// Policy Divergence
// ==============================================
//
// The same access pattern must produce different survivors under the two
// policies; this guards against one policy accidentally shadowing the other.

mod divergence {
    use super::*;

    #[test]
    fn hot_key_survives_lfu_but_not_lru() {
        // A: accessed repeatedly early on. Then a scan of one-shot keys.
        let mut lru = LruCache::new(2);
        let mut lfu = LfuCache::new(2);

        lru.insert('a', 0);
        lfu.insert('a', 0);
        for _ in 0..5 {
            lru.get(&'a');
            lfu.get(&'a');
        }

        for (i, key) in ['b', 'c', 'd'].into_iter().enumerate() {
            lru.insert(key, i as i32 + 1);
            lfu.insert(key, i as i32 + 1);
        }

        // LFU pins the hot key; LRU churned it out with the scan.
        assert!(lfu.contains(&'a'));
        assert!(!lru.contains(&'a'));
    }
}
