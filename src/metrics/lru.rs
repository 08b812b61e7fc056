//! LRU Cache Metrics
//!
//! Metrics specific to the resizable LRU cache.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// LRU-specific metrics (extends CoreCacheMetrics)
///
/// On top of the core counters the LRU cache tracks how often an overflowing
/// `put` recycled the tail slot and how many entries were dropped by shrinking
/// the capacity.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LruCacheMetrics {
    /// Core metrics common to all cache algorithms
    pub core: CoreCacheMetrics,

    /// Overflowing `put` calls that overwrote the least recently used slot
    pub slot_reuses: u64,

    /// Number of `resize` calls
    pub resizes: u64,

    /// Entries evicted by shrinking `resize` calls (also counted in `core.evictions`)
    pub resize_evictions: u64,
}

impl LruCacheMetrics {
    /// Creates a zeroed set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an overflowing insert that recycled the tail slot.
    ///
    /// Counts as one eviction and one insertion.
    pub fn record_slot_reuse(&mut self) {
        self.slot_reuses += 1;
        self.core.record_eviction();
        self.core.record_insertion();
    }

    /// Records a `resize` call that evicted `evicted` entries.
    pub fn record_resize(&mut self, evicted: usize) {
        self.resizes += 1;
        self.resize_evictions += evicted as u64;
        self.core.evictions += evicted as u64;
    }

    /// Converts LRU metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert("resize_evictions".to_string(), self.resize_evictions as f64);
        metrics.insert("resizes".to_string(), self.resizes as f64);
        metrics.insert("slot_reuses".to_string(), self.slot_reuses as f64);
        metrics
    }
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}
