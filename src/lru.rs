//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides a resizable LRU cache with O(1) operations for all
//! common cache operations.
//!
//! # Algorithm
//!
//! The cache keeps two structures describing the same set of live entries:
//!
//! - a hash map from key to a `NodeId` handle (the lookup index);
//! - an arena-backed doubly linked list ordering entries from most recently
//!   used (front) to least recently used (back).
//!
//! Every successful `get` and every `put` moves the touched entry to the front.
//! When a `put` of a new key finds the cache full, the back node is recycled
//! in place: its old key leaves the index, the node is overwritten with the new
//! pair and moved to the front. Shrinking the capacity with `resize` pops nodes
//! off the back until the cache fits.
//!
//! Both structures are only ever changed together, through a handful of private
//! helpers, so a key is in the index exactly when its entry is in the list.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get / Peek: O(1)
//!   - Put: O(1)
//!   - Remove: O(1)
//!   - Resize: O(k) where k is the number of evicted entries
//!
//! - **Space Complexity**:
//!   - O(n) where n is the largest number of entries ever held at once.
//!     Slots freed by a shrinking resize are kept for reuse.
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. For concurrent access, wrap the cache
//! with a synchronization primitive such as `Mutex`; every operation, `get`
//! included, needs exclusive access because lookups reorder entries.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::entry::CacheEntry;
use crate::list::{self, List, NodeId};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use core::mem;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Upper bound on the slots reserved up front; larger caches grow on demand.
const MAX_PREALLOCATION: usize = 4096;

/// A resizable Least Recently Used (LRU) cache.
///
/// The cache holds at most [`cap`](LruCache::cap) entries. Inserting a new key
/// into a full cache evicts the least recently used entry. The capacity can be
/// changed at any time with [`resize`](LruCache::resize); shrinking evicts from
/// the least recently used end.
///
/// # Examples
///
/// ```
/// use resizable_lru::LruCache;
///
/// let mut cache = LruCache::new(2);
///
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// cache.put("cherry", 3);
/// assert_eq!(cache.get(&"banana"), None);
///
/// // Shrinking keeps only the most recently used entries
/// let evicted = cache.resize(1);
/// assert_eq!(evicted, vec![("apple", 1)]);
/// assert_eq!(cache.peek(&"cherry"), Some(&3));
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    capacity: usize,
    list: List<CacheEntry<K, V>>,
    map: HashMap<K, NodeId, S>,
    metrics: LruCacheMetrics,
}

impl<K: Hash + Eq, V> LruCache<K, V> {
    /// Creates an empty cache holding at most `cap` entries.
    ///
    /// A capacity of zero is allowed; such a cache ignores every `put` until it
    /// is grown with [`resize`](LruCache::resize).
    pub fn new(cap: usize) -> LruCache<K, V, DefaultHashBuilder> {
        LruCache::with_hasher(cap, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates an empty cache with the given capacity and hash builder.
    pub fn with_hasher(cap: usize, hash_builder: S) -> Self {
        let prealloc = cap.min(MAX_PREALLOCATION);
        LruCache {
            capacity: cap,
            list: List::with_capacity(prealloc),
            map: HashMap::with_capacity_and_hasher(prealloc, hash_builder),
            metrics: LruCacheMetrics::new(),
        }
    }

    /// Creates an empty cache from a config.
    ///
    /// Uses `S::default()` when no hash builder is given.
    ///
    /// # Examples
    ///
    /// ```
    /// use resizable_lru::config::LruCacheConfig;
    /// use resizable_lru::LruCache;
    ///
    /// let cache: LruCache<String, String> = LruCache::init(LruCacheConfig::new(3), None);
    /// assert_eq!(cache.cap(), 3);
    /// ```
    pub fn init(config: LruCacheConfig, hash_builder: Option<S>) -> Self
    where
        S: Default,
    {
        Self::with_hasher(config.capacity, hash_builder.unwrap_or_default())
    }

    /// Maximum number of entries the cache holds.
    #[inline]
    pub fn cap(&self) -> usize {
        self.capacity
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Counters collected since the cache was created.
    #[inline]
    pub fn counters(&self) -> &LruCacheMetrics {
        &self.metrics
    }

    /// Returns the value for `key` and marks the entry as most recently used.
    ///
    /// Returns `None` when the key is absent. A lookup never evicts.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(id) = self.map.get(key).copied() else {
            self.metrics.core.record_miss();
            return None;
        };
        self.touch(id);
        self.metrics.core.record_hit();
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Like [`get`](LruCache::get), but hands out a mutable reference.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(id) = self.map.get(key).copied() else {
            self.metrics.core.record_miss();
            return None;
        };
        self.touch(id);
        self.metrics.core.record_hit();
        self.list.get_mut(id).map(|entry| &mut entry.value)
    }

    /// Returns the value for `key` without changing the access order.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = *self.map.get(key)?;
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Returns `true` if `key` is cached. Does not change the access order.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Returns the entry that the next overflowing `put` would evict.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let id = self.list.back()?;
        self.list.get(id).map(CacheEntry::as_pair)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let pair = self.evict_lru()?;
        self.metrics.core.record_removal();
        Some(pair)
    }

    /// Removes `key` and returns its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.map.remove(key)?;
        self.metrics.core.record_removal();
        self.list.remove(id).map(|entry| entry.value)
    }

    /// Changes the capacity.
    ///
    /// Growing never touches the entries. Shrinking evicts least recently used
    /// entries until `len() <= new_cap`. The evicted pairs are returned in
    /// eviction order, least recently used first.
    pub fn resize(&mut self, new_cap: usize) -> Vec<(K, V)> {
        let mut evicted = Vec::with_capacity(self.len().saturating_sub(new_cap));
        while self.map.len() > new_cap {
            match self.evict_lru() {
                Some(pair) => evicted.push(pair),
                None => break,
            }
        }
        self.capacity = new_cap;
        self.metrics.record_resize(evicted.len());
        evicted
    }

    /// Removes every entry. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
    }

    /// Iterates from the most to the least recently used entry.
    ///
    /// Iterating does not change the access order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Lists every live entry in lookup index order.
    ///
    /// The order is whatever the hash map yields and says nothing about
    /// recency; use [`iter`](LruCache::iter) for access order. Intended for
    /// diagnostics.
    pub fn dump(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.map
            .values()
            .filter_map(move |&id| self.list.get(id).map(CacheEntry::as_pair))
    }

    #[inline]
    fn touch(&mut self, id: NodeId) {
        self.list.move_to_front(id);
    }

    fn evict_lru(&mut self) -> Option<(K, V)> {
        let entry = self.list.pop_back()?;
        self.map.remove(&entry.key);
        Some(entry.into_pair())
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts or updates `key`, making it the most recently used entry.
    ///
    /// Returns the displaced pair:
    /// - `Some((key, old_value))` when the key was already cached;
    /// - `Some(evicted)` when the cache was full and the least recently used
    ///   entry made room;
    /// - `None` otherwise. A zero-capacity cache stores nothing and returns `None`.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if self.capacity == 0 {
            return None;
        }

        if let Some(id) = self.map.get(&key).copied() {
            self.touch(id);
            self.metrics.core.record_update();
            let entry = self.list.get_mut(id)?;
            let old_value = mem::replace(&mut entry.value, value);
            return Some((key, old_value));
        }

        if self.map.len() >= self.capacity {
            return self.recycle_lru(key, value);
        }

        self.insert(key, value);
        None
    }

    fn insert(&mut self, key: K, value: V) {
        let id = self.list.push_front(CacheEntry::new(key.clone(), value));
        self.map.insert(key, id);
        self.metrics.core.record_insertion();
    }

    /// Overwrites the least recently used slot with a new pair.
    fn recycle_lru(&mut self, key: K, value: V) -> Option<(K, V)> {
        let id = self.list.back()?;
        let old = self.list.replace(id, CacheEntry::new(key.clone(), value))?;
        self.map.remove(&old.key);
        self.map.insert(key, id);
        self.touch(id);
        self.metrics.record_slot_reuse();
        Some(old.into_pair())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("len", &self.list.len())
            .finish()
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> IntoIterator for &'a LruCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// Iterator over cache entries from most to least recently used.
///
/// Created by [`LruCache::iter`].
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, CacheEntry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(CacheEntry::as_pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}
