//! Cache Store Module
//!
//! Bounded string cache combining HashMap storage with LRU tracking.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheStats, LruTracker, DEFAULT_MAX_ENTRIES};

// == Cache Store ==
/// Bounded key-value storage with least-recently-used eviction.
///
/// `entries` and `lru` always hold the same key set. Callers sharing a store
/// across tasks must guard the whole store with one lock.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, String>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore holding at most `max_entries` entries.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(max_entries),
            max_entries,
        }
    }

    // == Set ==
    /// Stores a key-value pair.
    ///
    /// Overwriting an existing key never evicts. Inserting a new key into a
    /// full cache first evicts the least recently used entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();

        if self.max_entries == 0 {
            debug!(key = %key, "Cache capacity is zero, dropping entry");
            return;
        }

        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.evict_least_recently_used();
        }

        self.lru.touch(&key);
        self.entries.insert(key, value.into());
        self.stats.set_size(self.entries.len());
    }

    // == Get ==
    /// Retrieves a value by key, refreshing its recency on a hit.
    pub fn get(&mut self, key: &str) -> Option<String> {
        match self.entries.get(key) {
            Some(value) => {
                let value = value.clone();
                self.lru.touch(key);
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Evict ==
    /// Removes the entry with the oldest access instant.
    fn evict_least_recently_used(&mut self) {
        if let Some(evicted) = self.lru.evict_oldest() {
            self.entries.remove(&evicted);
            self.stats.record_eviction();
            debug!(key = %evicted, "Evicted least recently used entry");
        }
    }

    // == Clear ==
    /// Removes every entry. Hit, miss and eviction counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
        self.stats.set_size(0);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_size(self.entries.len());
        stats
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Last access instant of a resident key.
    pub fn access_instant(&self, key: &str) -> Option<u64> {
        self.lru.instant_of(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}
