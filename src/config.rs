//! Cache Configuration Module
//!
//! Configuration structures for the resizable LRU cache.
//!
//! # Design Philosophy
//!
//! Configuration structs have all public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Type safety**: All parameters must be provided at construction
//! - **No boilerplate**: No builder methods needed
//!
//! # Sizing Guidelines
//!
//! `capacity` is the maximum number of live entries. Each entry costs the key
//! twice (once in the lookup index, once in the access-order list), the value,
//! and roughly 40 bytes of links and table overhead.
//!
//! ```text
//! Total Memory ≈ capacity × (2 × key_size + value_size + ~40 bytes)
//! ```
//!
//! A capacity of zero is legal. Such a cache stores nothing until it is grown
//! with [`LruCache::resize`](crate::LruCache::resize).
//!
//! # Examples
//!
//! ```
//! use resizable_lru::config::LruCacheConfig;
//! use resizable_lru::LruCache;
//!
//! let config = LruCacheConfig { capacity: 10_000 };
//! let cache: LruCache<String, Vec<u8>> = LruCache::init(config, None);
//! assert_eq!(cache.cap(), 10_000);
//! ```

use core::fmt;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold. May be zero, and
///   may be changed later with [`LruCache::resize`](crate::LruCache::resize).
///
/// # Examples
///
/// ```
/// use resizable_lru::config::LruCacheConfig;
/// use resizable_lru::LruCache;
///
/// const SESSIONS: LruCacheConfig = LruCacheConfig::new(512);
/// let cache: LruCache<&str, i32> = LruCache::init(SESSIONS, None);
/// assert!(cache.is_empty());
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: usize,
}

impl LruCacheConfig {
    /// Creates a config for a cache holding at most `capacity` entries.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
