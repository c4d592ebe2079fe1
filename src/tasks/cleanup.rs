//! TTL Cleanup Task
//!
//! Background task that periodically removes expired result-cache entries.
//! Expiry is already enforced lazily on every lookup; the sweep just keeps
//! entries that are never looked up again from lingering until eviction.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ResultCache;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. It acquires a write lock on the cache for each sweep.
///
/// # Arguments
/// * `cache` - Shared reference to the result cache
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it during graceful
/// shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<ResultCache>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Cache cleanup task started (interval: {}s)",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache = cache.write().await;
                cache.cleanup_expired()
            };

            if removed > 0 {
                debug!("Cleanup removed {} expired cache entries", removed);
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache = Arc::new(RwLock::new(ResultCache::new(100, 50)));

        {
            let mut cache = cache.write().await;
            cache.set("key1".to_string(), 1);
            cache.set("key2".to_string(), 2);
        }

        let handle = spawn_cleanup_task(cache.clone(), 1);

        // Entries expire after 50ms; the first sweep runs after 1s
        tokio::time::sleep(Duration::from_millis(1200)).await;

        assert!(cache.read().await.is_empty());
        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_keeps_live_entries() {
        let cache = Arc::new(RwLock::new(ResultCache::new(100, 60_000)));

        cache.write().await.set("key1".to_string(), 1);

        let handle = spawn_cleanup_task(cache.clone(), 1);
        tokio::time::sleep(Duration::from_millis(1200)).await;

        assert_eq!(cache.read().await.len(), 1);
        handle.abort();
    }
}
