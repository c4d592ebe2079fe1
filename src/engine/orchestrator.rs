//! Request Orchestrator Module
//!
//! Per-request control flow: fast path for length, cache check for vowel
//! counting, and the chunk fan-out/fan-in pipeline on a miss.

use std::sync::Arc;

use futures::future::try_join_all;
use tokio::sync::{oneshot, RwLock};
use tracing::Instrument;

use crate::cache::{cache_key, ResultCache};
use crate::config::Config;
use crate::engine::aggregator;
use crate::engine::chunker;
use crate::engine::pool::{PartialResult, WorkItem, WorkerPool};
use crate::engine::worker::Operation;
use crate::error::{AnalysisError, Result};

/// Endpoint label baked into vowel-count cache keys. Part of the persisted
/// key format; do not rename.
const VOWELS_CACHE_ENDPOINT: &str = "num_vowels";

// == Cache Status ==
/// How the cache participated in a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Answer served from the cache
    Hit,
    /// Computed and stored for next time
    Miss,
    /// Cache deliberately skipped (uncacheable operation or oversized text)
    Bypass,
}

impl CacheStatus {
    /// Wire representation, used in the `x-cache` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "HIT",
            CacheStatus::Miss => "MISS",
            CacheStatus::Bypass => "ByPass",
        }
    }
}

// == Analysis Request / Result ==
/// One inbound analysis request, already parsed and size-validated.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Which analysis to run
    pub operation: Operation,
    /// The full input text
    pub text: String,
}

/// The orchestrator's answer for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analysis {
    /// The computed (or cached) value
    pub value: u64,
    /// How the cache participated
    pub cache_status: CacheStatus,
}

// == Analysis Engine ==
/// Long-lived orchestrator gluing chunker, pool, aggregator, and cache.
///
/// One instance is constructed at startup and shared by reference across
/// all concurrent requests.
pub struct AnalysisEngine {
    pool: Arc<WorkerPool>,
    cache: Arc<RwLock<ResultCache>>,
    chunk_size: usize,
    cache_max_text_chars: usize,
}

impl AnalysisEngine {
    // == Constructor ==
    pub fn new(pool: Arc<WorkerPool>, cache: Arc<RwLock<ResultCache>>, config: &Config) -> Self {
        Self {
            pool,
            cache,
            chunk_size: config.chunk_size,
            cache_max_text_chars: config.cache_max_text_chars,
        }
    }

    /// The shared worker pool.
    pub fn pool(&self) -> &WorkerPool {
        &self.pool
    }

    // == Analyze ==
    /// Runs one analysis request to completion.
    ///
    /// `length` always takes the direct path: a trivial O(n) scan gains
    /// nothing from chunk distribution or caching, so it never touches
    /// either. `vowels` goes through cache check, distributed compute, and
    /// cache populate. The two paths are intentionally not unified.
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<Analysis> {
        match request.operation {
            Operation::Length => Ok(Analysis {
                value: request.text.chars().count() as u64,
                cache_status: CacheStatus::Bypass,
            }),
            Operation::Vowels => self.analyze_vowels(&request.text).await,
        }
    }

    /// Cache-checked vowel count.
    async fn analyze_vowels(&self, text: &str) -> Result<Analysis> {
        // None means the text is too large to key economically: bypass,
        // not a miss.
        let key = cache_key(VOWELS_CACHE_ENDPOINT, text, self.cache_max_text_chars);

        if let Some(key) = &key {
            if let Some(value) = self.cache_get(key).await {
                return Ok(Analysis {
                    value,
                    cache_status: CacheStatus::Hit,
                });
            }
        }

        let value = self.compute_distributed(Operation::Vowels, text).await?;

        Ok(match key {
            Some(key) => {
                self.cache_set(key, value).await;
                Analysis {
                    value,
                    cache_status: CacheStatus::Miss,
                }
            }
            None => Analysis {
                value,
                cache_status: CacheStatus::Bypass,
            },
        })
    }

    // == Distributed Compute ==
    /// Splits the text, fans all chunks out to the pool, awaits all of
    /// them, and reduces the partial results.
    ///
    /// Every chunk is submitted before any result is awaited, so the pool
    /// stays saturated across concurrent requests. Any chunk failure fails
    /// the whole request; no partial value is produced.
    pub async fn compute_distributed(&self, operation: Operation, text: &str) -> Result<u64> {
        let chunks = chunker::split(text, self.chunk_size);
        if chunks.is_empty() {
            return Ok(0);
        }

        let text_length = text.chars().count();
        let span = match operation {
            Operation::Length => tracing::info_span!(
                "compute.length",
                text_length,
                chunk_size = self.chunk_size,
                chunks = chunks.len(),
                workers = self.pool.max_threads(),
            ),
            Operation::Vowels => tracing::info_span!(
                "compute.vowels",
                text_length,
                chunk_size = self.chunk_size,
                chunks = chunks.len(),
                workers = self.pool.max_threads(),
            ),
        };

        async {
            let receivers: Vec<_> = chunks
                .into_iter()
                .map(|chunk| self.pool.submit_item(WorkItem { operation, chunk }))
                .collect();

            let parts = Self::collect_parts(receivers).await?;
            Ok(aggregator::reduce(parts))
        }
        .instrument(span)
        .await
    }

    /// Awaits every outstanding chunk result. A dropped reply channel
    /// means the worker died mid-task and counts as a worker failure.
    async fn collect_parts(
        receivers: Vec<oneshot::Receiver<Result<PartialResult>>>,
    ) -> Result<Vec<PartialResult>> {
        try_join_all(receivers)
            .await
            .map_err(|_| AnalysisError::WorkerFailure("worker dropped its result".to_string()))?
            .into_iter()
            .collect()
    }

    // == Cache Access ==
    /// Best-effort cache read: any cache trouble reads as a miss.
    async fn cache_get(&self, key: &str) -> Option<u64> {
        self.cache.write().await.get(key)
    }

    /// Best-effort cache write: a failed write never fails the request.
    async fn cache_set(&self, key: String, value: u64) {
        self.cache.write().await.set(key, value);
    }
}
