//! Response DTOs for the analysis API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for POST /length
#[derive(Debug, Clone, Serialize)]
pub struct LengthResponse {
    /// Character count of the submitted text
    pub length: u64,
}

impl LengthResponse {
    /// Creates a new LengthResponse
    pub fn new(length: u64) -> Self {
        Self { length }
    }
}

/// Response body for POST /num_vowels
#[derive(Debug, Clone, Serialize)]
pub struct VowelsResponse {
    /// ASCII vowel count of the submitted text
    pub vowel_count: u64,
}

impl VowelsResponse {
    /// Creates a new VowelsResponse
    pub fn new(vowel_count: u64) -> Self {
        Self { vowel_count }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(hits: u64, misses: u64, evictions: u64, total_entries: usize) -> Self {
        let total_lookups = hits + misses;
        let hit_rate = if total_lookups > 0 {
            hits as f64 / total_lookups as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            evictions,
            total_entries,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Liveness flag
    pub ok: bool,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new healthy HealthResponse with the current timestamp
    pub fn healthy() -> Self {
        Self {
            ok: true,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_response_serialize() {
        let json = serde_json::to_string(&LengthResponse::new(4)).unwrap();
        assert_eq!(json, r#"{"length":4}"#);
    }

    #[test]
    fn test_vowels_response_serialize() {
        let json = serde_json::to_string(&VowelsResponse::new(10)).unwrap();
        assert_eq!(json, r#"{"vowel_count":10}"#);
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let resp = StatsResponse::new(80, 20, 5, 100);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_stats_response_zero_lookups() {
        let resp = StatsResponse::new(0, 0, 0, 0);
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_health_response_serialize() {
        let json = serde_json::to_string(&HealthResponse::healthy()).unwrap();
        assert!(json.contains(r#""ok":true"#));
        assert!(json.contains("timestamp"));
    }
}
