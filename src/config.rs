//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

// == Fixed Limits ==
/// Maximum text length accepted by the analysis endpoints, in characters.
pub const MAX_TEXT_CHARS: usize = 1024 * 1024; // 1,048,576

/// Maximum number of entries the result cache can hold.
pub const CACHE_MAX_ENTRIES: usize = 500;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Number of characters per chunk for distributed computation
    pub chunk_size: usize,
    /// Maximum number of concurrently executing workers
    pub worker_threads: usize,
    /// Result cache TTL in milliseconds
    pub cache_ttl_ms: u64,
    /// Texts longer than this (in characters) bypass the cache entirely
    pub cache_max_text_chars: usize,
    /// Background cache sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 3000)
    /// - `CHUNK_SIZE` - Characters per chunk (default: 262144)
    /// - `WORKER_THREADS` - Worker count; 0 or unset means max(2, CPU count)
    /// - `CACHE_TTL_MS` - Result cache TTL in milliseconds (default: 60000)
    /// - `CACHE_MAX_TEXT_CHARS` - Cache keying cutoff (default: 100000)
    /// - `CLEANUP_INTERVAL` - Cache sweep frequency in seconds (default: 5)
    pub fn from_env() -> Self {
        let configured_threads: usize = env::var("WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        Self {
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            chunk_size: env::var("CHUNK_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&v: &usize| v > 0)
                .unwrap_or(262_144),
            worker_threads: if configured_threads > 0 {
                configured_threads
            } else {
                default_worker_threads()
            },
            cache_ttl_ms: env::var("CACHE_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60_000),
            cache_max_text_chars: env::var("CACHE_MAX_TEXT_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100_000),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }
}

/// Default worker count: max(2, logical CPU count).
fn default_worker_threads() -> usize {
    let cpus = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    cpus.max(2)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            chunk_size: 262_144,
            worker_threads: default_worker_threads(),
            cache_ttl_ms: 60_000,
            cache_max_text_chars: 100_000,
            cleanup_interval: 5,
        }
    }
}
