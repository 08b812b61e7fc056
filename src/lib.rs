#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## How the cache is put together
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                             LruCache                                 │
//! │                                                                      │
//! │   lookup index (HashMap<K, NodeId>)                                  │
//! │     "a" ─┐   "b" ─┐   "c" ─┐                                         │
//! │          ▼        ▼        ▼                                         │
//! │   access-order list (Vec arena, linked by index)                     │
//! │   front (MRU) ─▶ [c] ⇄ [b] ⇄ [a] ◀─ back (LRU, next victim)          │
//! │                                                                      │
//! │   free list: slots released by remove / shrinking resize             │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Reference
//!
//! | Operation | Reorders? | Evicts? | Cost |
//! |-----------|-----------|---------|------|
//! | [`get`](LruCache::get) | yes | no | O(1) |
//! | [`peek`](LruCache::peek) | no | no | O(1) |
//! | [`put`](LruCache::put) | yes | when full | O(1) |
//! | [`resize`](LruCache::resize) | no | when shrinking | O(k) |
//! | [`dump`](LruCache::dump) | no | no | O(n) |
//!
//! ## Code Examples
//!
//! ### Basic use
//!
//! ```rust
//! use resizable_lru::LruCache;
//!
//! let mut cache = LruCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");      // "a" becomes most recently used
//! cache.put("c", 3);    // "b" evicted (least recently used)
//! assert!(cache.get(&"b").is_none());
//! ```
//!
//! ### Peeking without touching recency
//!
//! ```rust
//! use resizable_lru::LruCache;
//!
//! let mut cache = LruCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! assert_eq!(cache.peek(&"a"), Some(&1));
//! cache.put("c", 3);    // "a" is still least recently used
//! assert!(cache.get(&"a").is_none());
//! ```
//!
//! ### Resizing
//!
//! ```rust
//! use resizable_lru::LruCache;
//!
//! let mut cache = LruCache::new(3);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3);
//!
//! let evicted = cache.resize(1);
//! assert_eq!(evicted, vec![("a", 1), ("b", 2)]);
//! assert_eq!(cache.get(&"c"), Some(&3));
//!
//! cache.resize(10);     // growing never evicts
//! assert_eq!(cache.cap(), 10);
//! ```
//!
//! ### Metrics
//!
//! ```rust
//! use resizable_lru::LruCache;
//! use resizable_lru::metrics::CacheMetrics;
//!
//! let mut cache = LruCache::new(1);
//! cache.put("a", 1);
//! cache.get(&"a");
//! cache.get(&"z");
//! let metrics = cache.metrics();
//! assert_eq!(metrics["cache_hits"], 1.0);
//! assert_eq!(metrics["cache_misses"], 1.0);
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: the resizable LRU cache
//! - [`config`]: configuration structures
//! - [`entry`]: the key-value pair stored per node
//! - [`metrics`]: metrics collection for cache performance monitoring

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(any(test, feature = "std", not(feature = "hashbrown")))]
extern crate std;

/// Cache entry type.
///
/// The key-value pair held by each node of the access-order list.
pub mod entry;

/// Arena-backed doubly linked list with index handles.
///
/// **Note**: This module is internal infrastructure. Handles are only valid while
/// the node they name is linked, which the cache guarantees by updating the list
/// and its lookup index together.
pub(crate) mod list;

/// Cache configuration structures.
pub mod config;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a resizable cache that evicts the least recently used items when
/// the capacity is reached or lowered.
pub mod lru;

/// Cache metrics system.
///
/// Counters recorded by the cache operations, reported through a common
/// [`CacheMetrics`](metrics::CacheMetrics) trait.
pub mod metrics;

pub use lru::LruCache;

pub use config::LruCacheConfig;
pub use entry::CacheEntry;
