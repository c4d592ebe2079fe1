//! Computation Engine Module
//!
//! Request-scoped, chunked, parallel computation: the chunker splits a text
//! into fixed-size pieces, the worker pool runs the per-chunk analysis under
//! a concurrency bound, and the aggregator folds the partial results back
//! into a single value. The orchestrator glues these together with the
//! result cache.

mod aggregator;
mod chunker;
mod orchestrator;
mod pool;
mod worker;


// Re-export public types
pub use aggregator::reduce;
pub use chunker::{split, Chunk};
pub use orchestrator::{Analysis, AnalysisEngine, AnalysisRequest, CacheStatus};
pub use pool::{PartialResult, WorkItem, WorkerPool};
pub use worker::{compute, Operation};

// == Public Constants ==
/// How long a transient worker stays alive without work before exiting.
pub const POOL_IDLE_TIMEOUT_MS: u64 = 10_000;
