//! Cache Module
//!
//! Provides the bounded in-memory search result cache with LRU eviction.

mod lru;
mod stats;
mod store;


// Re-export public types
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Capacity used when none is configured
pub const DEFAULT_MAX_ENTRIES: usize = 100;
