//! Correctness Tests for the Resizable LRU Cache
//!
//! Validates the eviction policy and capacity handling with small,
//! predictable access patterns. Each test states which key must be gone after
//! an operation that evicts.
//!
//! ## Test Strategy
//! - Small cache sizes (1-5 entries) for predictable behavior
//! - Deterministic access patterns
//! - Explicit checks for which key was evicted after each put or resize

use resizable_lru::config::LruCacheConfig;
use resizable_lru::LruCache;

// ============================================================================
// HELPER FUNCTIONS FOR CACHE CREATION
// ============================================================================

/// Helper to create an LruCache with the given capacity
fn make_lru<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    let config = LruCacheConfig { capacity: cap };
    LruCache::init(config, None)
}

/// Keys from most to least recently used
fn recency<K: std::hash::Hash + Eq + Clone, V>(cache: &LruCache<K, V>) -> Vec<K> {
    cache.iter().map(|(k, _)| k.clone()).collect()
}

// ============================================================================
// LRU EVICTION
// ============================================================================
// Correctness criteria:
// 1. Most recently accessed items stay in cache
// 2. Oldest accessed items are evicted first
// 3. Access (get) and overwrite (put) update recency, peek does not

#[test]
fn test_lru_evicts_least_recently_used() {
    let mut cache = make_lru(3);

    cache.put(1, 10);
    cache.put(2, 20);
    cache.put(3, 30);
    // LRU order: 1 (LRU) -> 2 -> 3 (MRU)

    assert!(cache.get(&1).is_some(), "Key 1 should be present");
    assert!(cache.get(&2).is_some(), "Key 2 should be present");
    assert!(cache.get(&3).is_some(), "Key 3 should be present");
    // After gets: LRU order is still 1 -> 2 -> 3

    cache.put(4, 40);

    assert!(
        cache.get(&1).is_none(),
        "Key 1 should have been evicted (was LRU)"
    );
    assert!(cache.get(&2).is_some(), "Key 2 should remain");
    assert!(cache.get(&3).is_some(), "Key 3 should remain");
    assert!(cache.get(&4).is_some(), "Key 4 should be present");

    cache.put(5, 50);

    assert!(
        cache.get(&2).is_none(),
        "Key 2 should have been evicted (was LRU)"
    );
    assert!(cache.get(&3).is_some(), "Key 3 should remain");
    assert!(cache.get(&4).is_some(), "Key 4 should remain");
    assert!(cache.get(&5).is_some(), "Key 5 should be present");
}

#[test]
fn test_lru_eviction_order_is_predictable() {
    let mut cache = make_lru(5);

    for i in 0..5 {
        cache.put(i, i * 10);
    }

    assert_eq!(cache.put(5, 50), Some((0, 0)), "First eviction: key 0");
    assert_eq!(cache.put(6, 60), Some((1, 10)), "Second eviction: key 1");
    assert_eq!(cache.put(7, 70), Some((2, 20)), "Third eviction: key 2");

    assert_eq!(recency(&cache), vec![7, 6, 5, 4, 3]);
}

#[test]
fn test_lru_recency_order_after_get() {
    let mut cache = make_lru(3);
    cache.put("k1", "v1");
    cache.put("k2", "v2");
    cache.put("k3", "v3");

    assert_eq!(cache.peek_lru(), Some((&"k1", &"v1")));

    cache.get(&"k1");
    assert_eq!(cache.peek_lru(), Some((&"k2", &"v2")));
    assert_eq!(recency(&cache), vec!["k1", "k3", "k2"]);
}

#[test]
fn test_lru_eviction_on_overflow() {
    let mut cache = make_lru(2);
    cache.put("a", "1");
    cache.put("b", "2");
    cache.put("c", "3");

    assert_eq!(cache.get(&"a"), None);
    assert_eq!(cache.get(&"b"), Some(&"2"));
    assert_eq!(cache.get(&"c"), Some(&"3"));
}

#[test]
fn test_lru_peek_does_not_reorder() {
    let mut cache = make_lru(2);
    cache.put("a", "1");
    cache.put("b", "2");
    assert_eq!(cache.peek(&"a"), Some(&"1"));
    cache.put("c", "3");

    assert_eq!(
        cache.get(&"a"),
        None,
        "a was still least recent despite the peek"
    );
    assert_eq!(cache.get(&"b"), Some(&"2"));
    assert_eq!(cache.get(&"c"), Some(&"3"));
}

#[test]
fn test_lru_update_refreshes_recency() {
    let mut cache = make_lru(2);
    cache.put("a", "1");
    cache.put("b", "2");
    cache.put("a", "9");
    cache.put("c", "3");

    assert_eq!(cache.get(&"b"), None, "b should be evicted, not a");
    assert_eq!(cache.get(&"a"), Some(&"9"));
    assert_eq!(cache.get(&"c"), Some(&"3"));
}

#[test]
fn test_lru_get_mut_counts_as_use() {
    let mut cache = make_lru(2);
    cache.put("a", 1);
    cache.put("b", 2);
    *cache.get_mut(&"a").unwrap() += 10;
    cache.put("c", 3);

    assert_eq!(cache.get(&"b"), None);
    assert_eq!(cache.get(&"a"), Some(&11));
}

#[test]
fn test_lru_contains_does_not_reorder() {
    let mut cache = make_lru(2);
    cache.put("a", 1);
    cache.put("b", 2);
    assert!(cache.contains(&"a"));
    cache.put("c", 3);
    assert!(!cache.contains(&"a"));
}

// ============================================================================
// RESIZE
// ============================================================================

#[test]
fn test_resize_down_evicts_from_lru_end() {
    let mut cache = make_lru(3);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);

    let evicted = cache.resize(1);

    assert_eq!(evicted, vec![("a", 1), ("b", 2)]);
    assert_eq!(cache.get(&"a"), None);
    assert_eq!(cache.get(&"b"), None);
    assert_eq!(cache.get(&"c"), Some(&3));
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.cap(), 1);
}

#[test]
fn test_resize_down_respects_recency() {
    let mut cache = make_lru(4);
    for key in ["a", "b", "c", "d"] {
        cache.put(key, key.len());
    }
    cache.get(&"a");
    cache.get(&"b");
    // LRU order: c (LRU) -> d -> a -> b (MRU)

    let evicted: Vec<&str> = cache.resize(2).into_iter().map(|(k, _)| k).collect();

    assert_eq!(evicted, vec!["c", "d"]);
    assert_eq!(recency(&cache), vec!["b", "a"]);
}

#[test]
fn test_resize_up_is_non_destructive() {
    let mut cache = make_lru(3);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);

    for extra in [0, 1, 100] {
        let cap = cache.cap();
        assert!(cache.resize(cap + extra).is_empty());
        assert_eq!(cache.peek(&"a"), Some(&1));
        assert_eq!(cache.peek(&"b"), Some(&2));
        assert_eq!(cache.peek(&"c"), Some(&3));
    }
    assert_eq!(cache.cap(), 104);
    assert_eq!(recency(&cache), vec!["c", "b", "a"]);
}

#[test]
fn test_resize_then_fill_to_new_capacity() {
    let mut cache = make_lru(2);
    cache.put(1, 1);
    cache.put(2, 2);
    cache.resize(4);
    assert_eq!(cache.put(3, 3), None);
    assert_eq!(cache.put(4, 4), None);
    assert_eq!(cache.len(), 4);
    assert_eq!(cache.put(5, 5), Some((1, 1)));
}

#[test]
fn test_shrink_then_grow_reuses_slots() {
    let mut cache = make_lru(8);
    for i in 0..8 {
        cache.put(i, i);
    }
    assert_eq!(cache.resize(2).len(), 6);
    cache.resize(8);
    for i in 100..106 {
        assert_eq!(cache.put(i, i), None);
    }
    assert_eq!(cache.len(), 8);
    assert_eq!(cache.peek_lru(), Some((&6, &6)));
}

// ============================================================================
// ZERO CAPACITY
// ============================================================================

#[test]
fn test_zero_capacity_stores_nothing() {
    let mut cache = make_lru(0);
    assert_eq!(cache.put("x", "1"), None);
    assert_eq!(cache.get(&"x"), None);
    assert_eq!(cache.len(), 0);
    assert!(cache.resize(0).is_empty());
    assert_eq!(cache.len(), 0);
}

#[test]
fn test_shrink_to_zero_then_grow() {
    let mut cache = make_lru(2);
    cache.put("a", 1);
    cache.put("b", 2);
    assert_eq!(cache.resize(0).len(), 2);
    cache.put("c", 3);
    assert!(cache.is_empty());

    cache.resize(1);
    cache.put("d", 4);
    assert_eq!(cache.get(&"d"), Some(&4));
}

// ============================================================================
// VALUES AND DIAGNOSTICS
// ============================================================================

#[test]
fn test_null_text_is_distinguishable_from_absence() {
    let mut cache: LruCache<String, String> = make_lru(2);
    cache.put("present".to_string(), "NULL".to_string());

    assert_eq!(cache.get("present").map(String::as_str), Some("NULL"));
    assert_eq!(cache.get("absent"), None);
}

#[test]
fn test_dump_matches_live_entries() {
    let mut cache: LruCache<String, String> = make_lru(3);
    for (k, v) in [("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")] {
        cache.put(k.to_string(), v.to_string());
    }
    cache.get("b");

    let mut dumped: Vec<String> = cache.dump().map(|(k, v)| format!("{k} {v}")).collect();
    dumped.sort();
    assert_eq!(dumped, vec!["b 2", "c 3", "d 4"]);

    // Dumping is read-only
    assert_eq!(cache.peek_lru().map(|(k, _)| k.as_str()), Some("c"));
}

#[test]
fn test_remove_and_pop_keep_structures_consistent() {
    let mut cache = make_lru(3);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);

    assert_eq!(cache.remove(&"b"), Some(2));
    assert_eq!(recency(&cache), vec!["c", "a"]);
    assert_eq!(cache.pop_lru(), Some(("a", 1)));
    assert_eq!(recency(&cache), vec!["c"]);
    assert_eq!(cache.dump().count(), 1);
    assert_eq!(cache.len(), 1);
}
