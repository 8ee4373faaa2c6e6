pub mod lfu;
pub mod lru;

pub use lfu::LfuCache;
pub use lru::LruCache;

#[cfg(feature = "concurrency")]
pub use lfu::ConcurrentLfuCache;
#[cfg(feature = "concurrency")]
pub use lru::ConcurrentLruCache;
