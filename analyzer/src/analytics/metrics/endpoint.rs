use super::latency::ResponseTimeStats;
use crate::analytics::record::RequestRecord;
use loadtest_report::endpoint_metrics::EndpointMetrics;
use std::collections::BTreeMap;

/// Groups records by endpoint label and computes per-group statistics.
///
/// Records without an endpoint are left out of the breakdown.
pub fn by_endpoint(records: &[RequestRecord]) -> BTreeMap<String, EndpointMetrics> {
    let mut groups: BTreeMap<&str, Vec<&RequestRecord>> = BTreeMap::new();
    for record in records {
        if let Some(endpoint) = record.endpoint.as_deref() {
            groups.entry(endpoint).or_default().push(record);
        }
    }

    groups
        .into_iter()
        .map(|(endpoint, group)| (endpoint.to_owned(), endpoint_metrics(&group)))
        .collect()
}

fn endpoint_metrics(group: &[&RequestRecord]) -> EndpointMetrics {
    let count = group.len() as u64;
    let times = ResponseTimeStats::from_samples(group.iter().filter_map(|r| r.response_time));
    let not_successful = group.iter().filter(|r| !r.is_confirmed_success()).count();
    let error_rate = if count > 0 {
        not_successful as f64 / count as f64 * 100.0
    } else {
        0.0
    };

    EndpointMetrics::new(count, times.avg, times.max, error_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        endpoint: Option<&str>,
        response_time: Option<f64>,
        success: Option<bool>,
    ) -> RequestRecord {
        RequestRecord {
            timestamp: None,
            response_time,
            endpoint: endpoint.map(str::to_owned),
            success,
        }
    }

    #[test]
    fn should_group_by_endpoint() {
        let records = vec![
            record(Some("A"), None, Some(true)),
            record(Some("A"), None, Some(false)),
            record(Some("B"), None, Some(true)),
        ];

        let endpoints = by_endpoint(&records);

        assert_eq!(endpoints.len(), 2);
        assert_eq!(endpoints["A"].count, 2);
        assert_eq!(endpoints["A"].error_rate, 50.0);
        assert_eq!(endpoints["B"].count, 1);
        assert_eq!(endpoints["B"].error_rate, 0.0);
    }

    #[test]
    fn should_exclude_records_without_endpoint() {
        let records = vec![
            record(None, Some(10.0), Some(true)),
            record(Some("GET /books"), Some(20.0), Some(true)),
        ];

        let endpoints = by_endpoint(&records);

        assert_eq!(endpoints.keys().collect::<Vec<_>>(), vec!["GET /books"]);
        assert_eq!(endpoints["GET /books"].count, 1);
    }

    #[test]
    fn should_count_unknown_outcome_as_error() {
        let records = vec![
            record(Some("A"), None, None),
            record(Some("A"), None, Some(true)),
            record(Some("A"), None, Some(true)),
            record(Some("A"), None, Some(true)),
        ];

        assert_eq!(by_endpoint(&records)["A"].error_rate, 25.0);
    }

    #[test]
    fn should_average_only_present_response_times() {
        let records = vec![
            record(Some("A"), Some(100.0), Some(true)),
            record(Some("A"), None, Some(true)),
            record(Some("A"), Some(300.0), Some(true)),
            record(Some("B"), None, Some(true)),
        ];

        let endpoints = by_endpoint(&records);

        assert_eq!(endpoints["A"].avg_time, 200.0);
        assert_eq!(endpoints["A"].max_time, 300.0);
        assert_eq!(endpoints["B"].avg_time, 0.0);
        assert_eq!(endpoints["B"].max_time, 0.0);
    }
}
