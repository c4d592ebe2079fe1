//! Aggregator Module
//!
//! Fan-in: combines one request's partial results into a single value.

use crate::engine::pool::PartialResult;

// == Reduce ==
/// Reduces partial results to their sum.
///
/// Results arrive in completion order, which is unspecified across workers,
/// so the sequence is first restored to chunk-index order and then summed
/// left to right. The identity for an empty input is 0.
pub fn reduce(mut parts: Vec<PartialResult>) -> u64 {
    parts.sort_by_key(|p| p.index);
    parts.iter().map(|p| p.value).sum()
}
