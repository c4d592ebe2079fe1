//! Cache Entry Module
//!
//! Defines the structure for individual cached results with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cached analysis result with its expiry metadata.
#[derive(Debug, Clone, Copy)]
pub struct CacheEntry {
    /// The cached result value
    pub value: u64,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_ms` from now.
    pub fn new(value: u64, ttl_ms: u64) -> Self {
        let now = current_timestamp_ms();
        Self {
            value,
            inserted_at: now,
            expires_at: now + ttl_ms,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry's TTL has elapsed.
    ///
    /// Boundary condition: an entry is expired once the current time is
    /// greater than or equal to its expiration time.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }

    // == Time To Live ==
    /// Remaining TTL in milliseconds; 0 once expired.
    pub fn ttl_remaining_ms(&self) -> u64 {
        self.expires_at.saturating_sub(current_timestamp_ms())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
