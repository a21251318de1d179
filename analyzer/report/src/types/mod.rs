pub mod endpoint_metrics;
pub mod report;
pub mod run_metrics;
pub mod run_set;
