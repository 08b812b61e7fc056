//! Cache Metrics Demonstration
//!
//! Runs the same small workload at several capacities and prints the metrics
//! each cache reports, including the LRU-specific slot reuse and resize
//! counters.

use resizable_lru::{config::LruCacheConfig, metrics::CacheMetrics, LruCache};
use std::collections::BTreeMap;

fn main() {
    println!("Cache Metrics Demonstration");
    println!("===========================\n");

    println!("Workload: insert 5 fruits, read back a few, insert 2 more, then shrink to 2\n");

    let caches: Vec<(usize, LruCache<&'static str, i32>)> =
        [2usize, 3, 5].into_iter().map(|cap| (cap, run_workload(cap))).collect();

    display_core_metrics(&caches);

    println!("\nLRU-Specific Metrics:\n");
    for (capacity, cache) in &caches {
        println!("{} cache, capacity {capacity}:", cache.algorithm_name());
        print_lru_metrics(&cache.metrics());
        println!();
    }

    demonstrate_deterministic_ordering(&caches[0].1);
}

/// Standard workload used for every capacity
fn run_workload(capacity: usize) -> LruCache<&'static str, i32> {
    let config = LruCacheConfig { capacity };
    let mut cache = LruCache::init(config, None);

    cache.put("apple", 1);
    cache.put("banana", 2);
    cache.put("cherry", 3);
    cache.put("date", 4);
    cache.put("elderberry", 5);

    cache.get(&"apple");
    cache.get(&"cherry");
    cache.get(&"date");
    cache.get(&"elderberry");

    cache.put("fig", 6);
    cache.put("grape", 7);
    cache.put("date", 40);

    cache.get(&"banana");
    cache.get(&"fig");

    let evicted = cache.resize(2);
    println!(
        "  capacity {capacity}: resize(2) evicted {:?}, kept {:?}",
        evicted.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
        cache.iter().map(|(k, _)| *k).collect::<Vec<_>>()
    );
    cache
}

fn display_core_metrics(caches: &[(usize, LruCache<&'static str, i32>)]) {
    println!("\nCore Performance Metrics:");
    println!(
        "{:<10} {:<8} {:<8} {:<10} {:<12} {:<8}",
        "Capacity", "Hits", "Misses", "Evictions", "Hit Rate %", "Requests"
    );
    println!("{}", "-".repeat(62));

    for (capacity, cache) in caches {
        let metrics = cache.metrics();
        let hits = metrics.get("cache_hits").unwrap_or(&0.0);
        let misses = metrics.get("cache_misses").unwrap_or(&0.0);
        let requests = metrics.get("requests").unwrap_or(&0.0);
        let evictions = metrics.get("evictions").unwrap_or(&0.0);
        let hit_rate = metrics.get("hit_rate").unwrap_or(&0.0) * 100.0;

        println!(
            "{capacity:<10} {hits:<8.0} {misses:<8.0} {evictions:<10.0} {hit_rate:<12.1} {requests:<8.0}"
        );
    }
}

fn print_lru_metrics(metrics: &BTreeMap<String, f64>) {
    let keys = [
        "insertions",
        "updates",
        "slot_reuses",
        "resizes",
        "resize_evictions",
    ];
    for key in &keys {
        if let Some(value) = metrics.get(*key) {
            println!("  - {}: {:.0}", key.replace('_', " "), value);
        }
    }
}

/// Metric keys come back in the same order on every call
fn demonstrate_deterministic_ordering(cache: &dyn CacheMetrics) {
    println!("Deterministic Metrics Ordering:");
    let first: Vec<String> = cache.metrics().into_keys().collect();
    let second: Vec<String> = cache.metrics().into_keys().collect();
    println!("  keys: {}", first.join(", "));
    println!("  identical across calls: {}", first == second);
}
