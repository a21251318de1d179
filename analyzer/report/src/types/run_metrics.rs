use super::endpoint_metrics::EndpointMetrics;
use crate::utils::round_float;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate statistics of a single load-test run.
///
/// All time values are in milliseconds, `error_rate` is a percentage in
/// `[0, 100]` and `throughput` is in requests per second. Every field falls
/// back to `0` when the underlying data is not available.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RunMetrics {
    pub total_requests: u64,
    pub success_requests: u64,
    pub failed_requests: u64,
    #[serde(serialize_with = "round_float")]
    pub error_rate: f64,
    #[serde(serialize_with = "round_float")]
    pub avg_response_time: f64,
    #[serde(serialize_with = "round_float")]
    pub min_response_time: f64,
    #[serde(serialize_with = "round_float")]
    pub max_response_time: f64,
    #[serde(serialize_with = "round_float")]
    pub p50: f64,
    #[serde(serialize_with = "round_float")]
    pub p90: f64,
    #[serde(serialize_with = "round_float")]
    pub p95: f64,
    #[serde(serialize_with = "round_float")]
    pub p99: f64,
    #[serde(serialize_with = "round_float")]
    pub throughput: f64,
    /// Per-endpoint breakdown, keyed by endpoint label.
    pub endpoints: BTreeMap<String, EndpointMetrics>,
}

impl RunMetrics {
    pub fn is_empty(&self) -> bool {
        self.total_requests == 0
    }
}
