// Multi-threaded smoke tests for the lock-guarded cache wrappers. The
// wrappers hold one lock over index and list state together, so concurrent
// mixed workloads must never corrupt either view.

#![cfg(feature = "concurrency")]

use std::sync::Arc;
use std::thread;

use bicache::policy::lfu::ConcurrentLfuCache;
use bicache::policy::lru::ConcurrentLruCache;

#[test]
fn lru_wrapper_survives_concurrent_churn() {
    let cache: Arc<ConcurrentLruCache<u64, u64>> = Arc::new(ConcurrentLruCache::new(64));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..500u64 {
                    let key = (t * 1000 + i) % 100;
                    cache.insert(key, i);
                    cache.get(&key);
                    if i % 7 == 0 {
                        cache.remove(&key);
                    }
                    if i % 11 == 0 {
                        cache.pop_lru();
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(cache.len() <= cache.capacity());
}

#[test]
fn lfu_wrapper_survives_concurrent_churn() {
    let cache: Arc<ConcurrentLfuCache<u64, u64>> = Arc::new(ConcurrentLfuCache::new(64));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..500u64 {
                    let key = (t * 1000 + i) % 100;
                    cache.insert(key, i);
                    cache.get(&key);
                    if i % 7 == 0 {
                        cache.remove(&key);
                    }
                    if i % 11 == 0 {
                        cache.pop_lfu();
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(cache.len() <= cache.capacity());
}

#[test]
fn lru_wrapper_shares_one_arc_per_value() {
    let cache: ConcurrentLruCache<u32, Vec<u8>> = ConcurrentLruCache::new(8);
    let payload = Arc::new(vec![1, 2, 3]);
    cache.insert_arc(1, Arc::clone(&payload));

    let a = cache.get(&1).unwrap();
    let b = cache.peek(&1).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert!(Arc::ptr_eq(&a, &payload));
}

#[test]
fn lfu_wrapper_keeps_frequency_across_threads() {
    let cache: Arc<ConcurrentLfuCache<u32, u32>> = Arc::new(ConcurrentLfuCache::new(8));
    cache.insert(1, 10);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for _ in 0..25 {
                    cache.get(&1);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // 1 from insert + 100 gets, each serialized under the write lock.
    assert_eq!(cache.frequency(&1), Some(101));
}

#[test]
fn wrapper_handles_are_cheap_clones_of_one_cache() {
    let cache: ConcurrentLruCache<u32, u32> = ConcurrentLruCache::new(4);
    let other = cache.clone();

    cache.insert(1, 10);
    assert_eq!(other.get(&1).as_deref(), Some(&10));

    other.clear();
    assert!(cache.is_empty());
}
