//! Result Cache Module
//!
//! Content-addressed store for computed analysis results, bounded by both
//! TTL and capacity (LRU eviction).

mod entry;
mod key;
mod lru;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use key::cache_key;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::ResultCache;
