//! API Handlers
//!
//! HTTP request handlers for each analysis endpoint, including the
//! observability response headers (`x-trace-id`, `x-backend-instance`,
//! `x-processing-ms`, `x-cache`).

use std::env;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::{HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::cache::ResultCache;
use crate::config::{Config, CACHE_MAX_ENTRIES};
use crate::engine::{AnalysisEngine, AnalysisRequest, CacheStatus, Operation, WorkerPool};
use crate::error::Result;
use crate::models::{AnalyzeRequest, HealthResponse, LengthResponse, StatsResponse, VowelsResponse};

// == Header Names ==
const X_TRACE_ID: HeaderName = HeaderName::from_static("x-trace-id");
const X_BACKEND_INSTANCE: HeaderName = HeaderName::from_static("x-backend-instance");
const X_PROCESSING_MS: HeaderName = HeaderName::from_static("x-processing-ms");
const X_CACHE: HeaderName = HeaderName::from_static("x-cache");

// == App State ==
/// Application state shared across all handlers.
///
/// Holds the single long-lived engine (worker pool + orchestrator) and the
/// result cache, both constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    /// The request orchestrator
    pub engine: Arc<AnalysisEngine>,
    /// Thread-safe result cache (also shared with the engine)
    pub cache: Arc<RwLock<ResultCache>>,
    /// Identifying token for this backend instance (`hostname:pid`)
    pub instance: Arc<str>,
}

impl AppState {
    /// Creates a new AppState from configuration.
    ///
    /// Builds the worker pool and result cache and wires them into the
    /// orchestrator. Must be called within a Tokio runtime.
    pub fn from_config(config: &Config) -> Self {
        let pool = Arc::new(WorkerPool::new(config.worker_threads));
        let cache = Arc::new(RwLock::new(ResultCache::new(
            CACHE_MAX_ENTRIES,
            config.cache_ttl_ms,
        )));
        let engine = Arc::new(AnalysisEngine::new(pool, cache.clone(), config));

        Self {
            engine,
            cache,
            instance: backend_instance().into(),
        }
    }
}

/// `hostname:pid` token identifying this process behind a load balancer.
fn backend_instance() -> String {
    let host = env::var("HOSTNAME").unwrap_or_else(|_| "localhost".to_string());
    format!("{host}:{}", std::process::id())
}

/// Trace id of the current request span, or empty when none is active.
fn current_trace_id() -> String {
    tracing::Span::current()
        .id()
        .map(|id| format!("{:016x}", id.into_u64()))
        .unwrap_or_default()
}

/// Wraps a JSON body with the analysis observability headers.
fn analysis_response<T: Serialize>(
    state: &AppState,
    start: Instant,
    cache_status: CacheStatus,
    body: T,
) -> Response {
    let mut response = Json(body).into_response();
    let headers = response.headers_mut();

    let set = |value: &str| {
        HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static(""))
    };
    headers.insert(X_TRACE_ID, set(&current_trace_id()));
    headers.insert(X_BACKEND_INSTANCE, set(&state.instance));
    headers.insert(X_PROCESSING_MS, set(&start.elapsed().as_millis().to_string()));
    headers.insert(X_CACHE, set(cache_status.as_str()));

    response
}

// == Handlers ==

/// Handler for POST /length
///
/// Character count via the orchestrator's direct fast path; never chunked,
/// pooled, or cached.
pub async fn length_handler(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Response> {
    let start = Instant::now();
    let text = req.text()?.to_string();

    let analysis = state
        .engine
        .analyze(AnalysisRequest {
            operation: Operation::Length,
            text,
        })
        .await?;

    Ok(analysis_response(
        &state,
        start,
        analysis.cache_status,
        LengthResponse::new(analysis.value),
    ))
}

/// Handler for POST /num_vowels
///
/// ASCII vowel count via cache check and chunked distributed computation.
pub async fn vowels_handler(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Response> {
    let start = Instant::now();
    let text = req.text()?.to_string();

    let analysis = state
        .engine
        .analyze(AnalysisRequest {
            operation: Operation::Vowels,
            text,
        })
        .await?;

    Ok(analysis_response(
        &state,
        start,
        analysis.cache_status,
        VowelsResponse::new(analysis.value),
    ))
}

/// Handler for GET /stats
///
/// Returns current result-cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.evictions,
        stats.total_entries,
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
