//! Plain-data snapshots of policy metrics for benches, tests, and exporters.

/// Point-in-time copy of [`LruMetrics`](crate::metrics::metrics_impl::LruMetrics).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LruMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub pop_lru_calls: u64,
    pub pop_lru_found: u64,
    pub touch_calls: u64,
    pub touch_found: u64,
    pub peek_lru_calls: u64,
    pub peek_lru_found: u64,
    pub recency_rank_calls: u64,
    pub recency_rank_found: u64,
    pub recency_rank_scan_steps: u64,
    pub cache_len: usize,
    pub capacity: usize,
}

/// Point-in-time copy of [`LfuMetrics`](crate::metrics::metrics_impl::LfuMetrics).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LfuMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub pop_lfu_calls: u64,
    pub pop_lfu_found: u64,
    pub reset_frequency_calls: u64,
    pub reset_frequency_found: u64,
    pub increment_frequency_calls: u64,
    pub increment_frequency_found: u64,
    pub peek_lfu_calls: u64,
    pub peek_lfu_found: u64,
    pub frequency_calls: u64,
    pub frequency_found: u64,
    pub cache_len: usize,
    pub capacity: usize,
}

impl LruMetricsSnapshot {
    /// Hit rate over all `get` calls, or `None` before the first call.
    pub fn hit_rate(&self) -> Option<f64> {
        if self.get_calls == 0 {
            None
        } else {
            Some(self.get_hits as f64 / self.get_calls as f64)
        }
    }
}

impl LfuMetricsSnapshot {
    /// Hit rate over all `get` calls, or `None` before the first call.
    pub fn hit_rate(&self) -> Option<f64> {
        if self.get_calls == 0 {
            None
        } else {
            Some(self.get_hits as f64 / self.get_calls as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_rate_handles_zero_calls() {
        let snap = LruMetricsSnapshot::default();
        assert_eq!(snap.hit_rate(), None);

        let snap = LruMetricsSnapshot {
            get_calls: 4,
            get_hits: 3,
            ..Default::default()
        };
        assert_eq!(snap.hit_rate(), Some(0.75));
    }
}
