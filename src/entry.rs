//! Cache Entry Type
//!
//! The key-value pair stored in each node of the cache's access-order list.
//!
//! The key is kept next to the value so that evicting the least recently used
//! node tells the cache which index slot to drop, and so that recycling a node
//! for a new key can hand the displaced pair back to the caller.

use core::fmt;

/// A cached key-value pair.
///
/// # Examples
///
/// ```
/// use resizable_lru::entry::CacheEntry;
///
/// let entry = CacheEntry::new("user:123", "Alice");
/// assert_eq!(entry.key, "user:123");
/// assert_eq!(entry.into_pair(), ("user:123", "Alice"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct CacheEntry<K, V> {
    /// The cached key. Never changes while the entry is live.
    pub key: K,

    /// The cached value.
    pub value: V,
}

impl<K, V> CacheEntry<K, V> {
    /// Creates a new entry.
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Splits the entry into its key and value.
    #[inline]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Borrows the key and value together.
    #[inline]
    pub fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for CacheEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn test_entry_pairs() {
        let entry = CacheEntry::new(String::from("k"), 7);
        assert_eq!(entry.as_pair(), (&String::from("k"), &7));
        assert_eq!(entry.into_pair(), (String::from("k"), 7));
    }

    #[test]
    fn test_entry_debug() {
        extern crate std;
        let entry = CacheEntry::new("a", 1);
        assert_eq!(
            std::format!("{:?}", entry),
            "CacheEntry { key: \"a\", value: 1 }"
        );
    }
}
