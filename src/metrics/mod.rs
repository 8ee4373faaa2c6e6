//! Feature-gated observability counters for the cache policies.

pub mod cell;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use metrics_impl::{LfuMetrics, LruMetrics};
pub use snapshot::{LfuMetricsSnapshot, LruMetricsSnapshot};
