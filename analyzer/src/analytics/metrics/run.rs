use super::{endpoint::by_endpoint, latency::ResponseTimeStats};
use crate::analytics::record::RequestRecord;
use loadtest_report::run_metrics::RunMetrics;

/// Computes the metrics of one run.
///
/// Total over any input: missing fields degrade to zero-valued statistics
/// and an empty slice yields all-zero metrics.
pub fn from_records(records: &[RequestRecord]) -> RunMetrics {
    if records.is_empty() {
        return RunMetrics::default();
    }

    let total_requests = records.len() as u64;
    let success_requests = records
        .iter()
        .filter(|r| r.is_confirmed_success())
        .count() as u64;
    let failed_requests = total_requests - success_requests;
    let error_rate = failed_requests as f64 / total_requests as f64 * 100.0;

    let times = ResponseTimeStats::from_samples(records.iter().filter_map(|r| r.response_time));

    RunMetrics {
        total_requests,
        success_requests,
        failed_requests,
        error_rate,
        avg_response_time: times.avg,
        min_response_time: times.min,
        max_response_time: times.max,
        p50: times.p50,
        p90: times.p90,
        p95: times.p95,
        p99: times.p99,
        throughput: throughput(records),
        endpoints: by_endpoint(records),
    }
}

/// Requests per second over the span between the earliest and the latest
/// known timestamp, `0` when the span is empty.
fn throughput(records: &[RequestRecord]) -> f64 {
    let mut timestamps = records.iter().filter_map(|r| r.timestamp);
    let Some(first) = timestamps.next() else {
        return 0.0;
    };
    let (earliest, latest) = timestamps.fold((first, first), |(min, max), ts| {
        (min.min(ts), max.max(ts))
    });

    let duration_secs = (latest - earliest).num_milliseconds() as f64 / 1_000.0;
    if duration_secs > 0.0 {
        records.len() as f64 / duration_secs
    } else {
        0.0
    }
}
