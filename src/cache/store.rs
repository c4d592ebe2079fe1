//! Result Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU tracking and TTL
//! expiration. Keys are content hashes, values are computed analysis
//! results.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats, LruTracker};

// == Result Cache ==
/// Size- and TTL-bounded store for computed results.
///
/// Best-effort by design: lookups and inserts cannot fail, and a missing or
/// expired entry simply reads as absent.
#[derive(Debug)]
pub struct ResultCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Entry TTL in milliseconds
    ttl_ms: u64,
}

impl ResultCache {
    // == Constructor ==
    /// Creates a new ResultCache with the given capacity and TTL.
    pub fn new(max_entries: usize, ttl_ms: u64) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries,
            ttl_ms,
        }
    }

    // == Get ==
    /// Retrieves a cached value.
    ///
    /// Expiry is lazy: an entry past its TTL is removed here and treated as
    /// absent. A live entry is marked most recently used.
    pub fn get(&mut self, key: &str) -> Option<u64> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.lru.remove(key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                let value = entry.value;
                self.stats.record_hit();
                self.lru.touch(key);
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a computed value under a key.
    ///
    /// Re-inserting an existing key refreshes its TTL and recency. When a
    /// new key arrives at capacity, the least recently used entry is
    /// evicted first.
    pub fn set(&mut self, key: String, value: u64) {
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            if let Some(evicted_key) = self.lru.evict_oldest() {
                self.entries.remove(&evicted_key);
                self.stats.record_eviction();
            }
        }

        self.entries.insert(key.clone(), CacheEntry::new(value, self.ttl_ms));
        self.lru.touch(&key);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Cleanup Expired ==
    /// Removes all expired entries; returns the number removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.lru.remove(&key);
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_cache_new() {
        let cache = ResultCache::new(100, 60_000);
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_set_and_get() {
        let mut cache = ResultCache::new(100, 60_000);

        cache.set("key1".to_string(), 42);
        assert_eq!(cache.get("key1"), Some(42));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_get_absent() {
        let mut cache = ResultCache::new(100, 60_000);
        assert_eq!(cache.get("nonexistent"), None);
    }

    #[test]
    fn test_cache_overwrite() {
        let mut cache = ResultCache::new(100, 60_000);

        cache.set("key1".to_string(), 1);
        cache.set("key1".to_string(), 2);

        assert_eq!(cache.get("key1"), Some(2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_ttl_expiration() {
        let mut cache = ResultCache::new(100, 50);

        cache.set("key1".to_string(), 7);
        assert_eq!(cache.get("key1"), Some(7));

        sleep(Duration::from_millis(80));

        // Expired entries read as absent and are removed
        assert_eq!(cache.get("key1"), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_cache_reinsert_refreshes_ttl() {
        let mut cache = ResultCache::new(100, 100);

        cache.set("key1".to_string(), 7);
        sleep(Duration::from_millis(60));
        cache.set("key1".to_string(), 7);
        sleep(Duration::from_millis(60));

        // Refreshed on re-insert, so still live 120ms after first insert
        assert_eq!(cache.get("key1"), Some(7));
    }

    #[test]
    fn test_cache_lru_eviction_at_capacity() {
        let mut cache = ResultCache::new(3, 60_000);

        cache.set("key1".to_string(), 1);
        cache.set("key2".to_string(), 2);
        cache.set("key3".to_string(), 3);
        cache.set("key4".to_string(), 4);

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get("key1"), None);
        assert_eq!(cache.get("key2"), Some(2));
        assert_eq!(cache.get("key3"), Some(3));
        assert_eq!(cache.get("key4"), Some(4));
    }

    #[test]
    fn test_cache_get_refreshes_recency() {
        let mut cache = ResultCache::new(3, 60_000);

        cache.set("key1".to_string(), 1);
        cache.set("key2".to_string(), 2);
        cache.set("key3".to_string(), 3);

        // key1 becomes most recently used, key2 is now oldest
        cache.get("key1");
        cache.set("key4".to_string(), 4);

        assert_eq!(cache.get("key1"), Some(1));
        assert_eq!(cache.get("key2"), None);
    }

    #[test]
    fn test_cache_stats() {
        let mut cache = ResultCache::new(100, 60_000);

        cache.set("key1".to_string(), 1);
        cache.get("key1"); // hit
        cache.get("nonexistent"); // miss

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_cache_cleanup_expired() {
        let mut cache = ResultCache::new(100, 50);

        cache.set("key1".to_string(), 1);
        sleep(Duration::from_millis(80));
        cache.set("key2".to_string(), 2);

        let removed = cache.cleanup_expired();
        assert_eq!(removed, 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("key2"), Some(2));
    }
}
