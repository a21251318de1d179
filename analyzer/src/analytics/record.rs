use chrono::{DateTime, Utc};

/// One observed request of a load-test run.
///
/// Every field is optional: a result log may lack a column, or carry a value
/// that cannot be interpreted. Absent values are never replaced by defaults
/// here; the metrics calculation decides how each absence is counted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestRecord {
    pub timestamp: Option<DateTime<Utc>>,
    /// Elapsed time in milliseconds.
    pub response_time: Option<f64>,
    pub endpoint: Option<String>,
    pub success: Option<bool>,
}

impl RequestRecord {
    /// Outcome policy shared by run totals and endpoint breakdowns: only an
    /// explicit `success == true` counts as a success, a missing outcome is
    /// counted as a failure.
    pub fn is_confirmed_success(&self) -> bool {
        self.success == Some(true)
    }
}
