//! Text API - chunked parallel text analysis over HTTP
//!
//! Splits large texts into fixed-size chunks, fans them out across a bounded
//! worker pool, aggregates partial results, and short-circuits repeat
//! requests via a TTL/LRU result cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use engine::AnalysisEngine;
pub use tasks::spawn_cleanup_task;
