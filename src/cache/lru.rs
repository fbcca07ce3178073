//! LRU Tracker Module
//!
//! Records the last-access instant of every resident key for LRU eviction.

use std::collections::{BTreeMap, HashMap};

// == LRU Tracker ==
/// Tracks access instants for LRU eviction.
///
/// Instants are ticks from a counter owned by the tracker, so every touch
/// gets a strictly larger instant than the one before it and ties never occur.
/// Two indexes are kept in step:
/// - `instants`: key -> last access tick
/// - `order`: tick -> key, ascending (first = least recently used)
#[derive(Debug, Default)]
pub struct LruTracker {
    instants: HashMap<String, u64>,
    order: BTreeMap<u64, String>,
    /// Next tick to hand out
    clock: u64,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Records an access to `key` at the next instant.
    ///
    /// Returns the instant assigned to the key.
    pub fn touch(&mut self, key: &str) -> u64 {
        let tick = self.clock;
        self.clock += 1;

        match self.instants.get_mut(key) {
            Some(previous) => {
                self.order.remove(&*previous);
                *previous = tick;
            }
            None => {
                self.instants.insert(key.to_string(), tick);
            }
        }
        self.order.insert(tick, key.to_string());
        tick
    }

    // == Remove ==
    /// Stops tracking a key. Unknown keys are ignored.
    pub fn remove(&mut self, key: &str) {
        if let Some(tick) = self.instants.remove(key) {
            self.order.remove(&tick);
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the key with the smallest access instant.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        let (_, key) = self.order.pop_first()?;
        self.instants.remove(&key);
        Some(key)
    }

    /// Returns the last access instant recorded for `key`.
    pub fn instant_of(&self, key: &str) -> Option<u64> {
        self.instants.get(key).copied()
    }

    // == Clear ==
    /// Forgets every key. The clock keeps running.
    pub fn clear(&mut self) {
        self.instants.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.instants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.instants.contains_key(key)
    }
}
