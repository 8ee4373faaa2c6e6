pub use crate::ds::{NodeArena, NodeRef, OrderList};
pub use crate::error::ConfigError;
pub use crate::policy::{LfuCache, LruCache};
pub use crate::traits::{CoreCache, LfuCacheTrait, LruCacheTrait, MutableCache};

#[cfg(feature = "concurrency")]
pub use crate::policy::{ConcurrentLfuCache, ConcurrentLruCache};
#[cfg(feature = "metrics")]
pub use crate::metrics::{LfuMetricsSnapshot, LruMetricsSnapshot};
