use crate::utils::round_float;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Statistics of all requests sharing one endpoint label within a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, new)]
pub struct EndpointMetrics {
    pub count: u64,
    #[serde(serialize_with = "round_float")]
    pub avg_time: f64,
    #[serde(serialize_with = "round_float")]
    pub max_time: f64,
    /// Percentage of requests in the group not confirmed successful.
    #[serde(serialize_with = "round_float")]
    pub error_rate: f64,
}
