//! Resizing a live cache
//!
//! Shows that shrinking evicts from the least recently used end, that
//! growing keeps every entry, and that slots released by a shrink are reused
//! before the cache allocates new ones.

use resizable_lru::LruCache;

fn show(label: &str, cache: &LruCache<String, String>) {
    let order: Vec<&str> = cache.iter().map(|(k, _)| k.as_str()).collect();
    println!(
        "{label:<28} cap={:<3} len={:<3} MRU -> LRU: {}",
        cache.cap(),
        cache.len(),
        order.join(" ")
    );
}

fn main() {
    let mut cache: LruCache<String, String> = LruCache::new(5);

    for name in ["alpha", "beta", "gamma", "delta", "epsilon"] {
        cache.put(name.to_string(), name.to_uppercase());
    }
    show("filled", &cache);

    cache.get("alpha");
    cache.get("gamma");
    show("after get alpha, gamma", &cache);

    let evicted = cache.resize(2);
    let names: Vec<&str> = evicted.iter().map(|(k, _)| k.as_str()).collect();
    show("resize(2)", &cache);
    println!("{:<28} {}", "  evicted (LRU first):", names.join(" "));

    assert!(cache.resize(6).is_empty());
    show("resize(6)", &cache);

    for name in ["zeta", "eta", "theta", "iota"] {
        cache.put(name.to_string(), name.to_uppercase());
    }
    show("refilled", &cache);

    if let Some((key, value)) = cache.put("kappa".to_string(), "KAPPA".to_string()) {
        println!("{:<28} {key} = {value}", "  overflow put evicted:");
    }

    cache.put("nothing".to_string(), "NULL".to_string());
    println!(
        "{:<28} {:?} vs {:?}",
        "  stored \"NULL\" vs missing:",
        cache.peek("nothing"),
        cache.peek("missing")
    );

    cache.resize(0);
    show("resize(0)", &cache);
    println!(
        "{:<28} {:?}",
        "  put at capacity 0:",
        cache.put("lost".to_string(), "x".to_string())
    );

    let counters = cache.counters();
    println!(
        "\nslot reuses: {}, resizes: {}, evicted by resize: {}",
        counters.slot_reuses, counters.resizes, counters.resize_evictions
    );
}
