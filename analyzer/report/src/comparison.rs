use crate::{run_metrics::RunMetrics, run_set::RunSet};
use charming::datatype::{DataFrame, DataPoint};
use std::collections::BTreeSet;

const HTTP_METHOD_PREFIXES: [&str; 7] = [
    "GET ", "POST ", "PUT ", "PATCH ", "DELETE ", "HEAD ", "OPTIONS ",
];

/// Requests per second delivered per millisecond of average response time.
///
/// The `+ 1` keeps the index finite for runs without response times.
pub fn efficiency_index(metrics: &RunMetrics) -> f64 {
    metrics.throughput / (metrics.avg_response_time + 1.0)
}

/// Run scores normalized to `0..=100` against the other runs, higher is better.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarScores {
    pub stability: f64,
    pub throughput: f64,
    pub performance: f64,
    pub p95_consistency: f64,
    pub p99_consistency: f64,
}

impl RadarScores {
    pub const AXES: [&'static str; 5] = ["Stability", "Throughput", "Performance", "P95", "P99"];

    pub fn as_vec(&self) -> Vec<f64> {
        vec![
            self.stability,
            self.throughput,
            self.performance,
            self.p95_consistency,
            self.p99_consistency,
        ]
    }

    /// Scores every run of the set, in run order.
    ///
    /// Percentile consistency is measured against the largest average
    /// response time of the set, so it may drop below zero for runs with a
    /// heavy tail; it is clamped to `0`.
    pub fn for_runs(runs: &RunSet) -> Vec<(String, RadarScores)> {
        let max_error = max_of(runs, |m| m.error_rate);
        let max_throughput = max_of(runs, |m| m.throughput);
        let max_time = max_of(runs, |m| m.avg_response_time);

        let inverted = |value: f64, max: f64| {
            if max > 0.0 {
                (100.0 - value / max * 100.0).clamp(0.0, 100.0)
            } else {
                100.0
            }
        };

        runs.iter()
            .map(|run| {
                let m = &run.metrics;
                let scores = RadarScores {
                    stability: inverted(m.error_rate, max_error),
                    throughput: if max_throughput > 0.0 {
                        m.throughput / max_throughput * 100.0
                    } else {
                        0.0
                    },
                    performance: inverted(m.avg_response_time, max_time),
                    p95_consistency: inverted(m.p95, max_time),
                    p99_consistency: inverted(m.p99, max_time),
                };
                (run.name.clone(), scores)
            })
            .collect()
    }
}

fn max_of<F>(runs: &RunSet, f: F) -> f64
where
    F: Fn(&RunMetrics) -> f64,
{
    runs.values(f).into_iter().fold(0.0, f64::max)
}

/// Average response time per endpoint (rows) and run (columns).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EndpointHeatmap {
    pub endpoints: Vec<String>,
    pub runs: Vec<String>,
    /// `cells[endpoint][run]`, `0` when the run has no such endpoint.
    pub cells: Vec<Vec<f64>>,
}

impl EndpointHeatmap {
    pub fn from_runs(runs: &RunSet) -> Self {
        let endpoints: Vec<String> = runs
            .iter()
            .flat_map(|run| run.metrics.endpoints.keys().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let cells = endpoints
            .iter()
            .map(|endpoint| {
                runs.iter()
                    .map(|run| {
                        run.metrics
                            .endpoints
                            .get(endpoint)
                            .map(|e| e.avg_time)
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        Self {
            endpoints,
            runs: runs.names(),
            cells,
        }
    }

    pub fn max_value(&self) -> f64 {
        self.cells
            .iter()
            .flatten()
            .copied()
            .fold(0.0, f64::max)
    }

    /// `[run_index, endpoint_index, value]` triples, values rounded to 2 decimals.
    pub fn points(&self) -> Vec<[f64; 3]> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, values)| {
                values.iter().enumerate().map(move |(col, value)| {
                    [col as f64, row as f64, (*value * 100.0).round() / 100.0]
                })
            })
            .collect()
    }

    /// [`Self::points`] in the shape expected by a heatmap series.
    pub fn as_charming_points(&self) -> Vec<DataFrame> {
        self.points()
            .into_iter()
            .map(|point| point.into_iter().map(DataPoint::from).collect())
            .collect()
    }

    /// Endpoint labels without their HTTP method, unless that makes two labels equal.
    pub fn axis_labels(&self) -> Vec<String> {
        let short: Vec<String> = self
            .endpoints
            .iter()
            .map(|endpoint| {
                HTTP_METHOD_PREFIXES
                    .iter()
                    .find_map(|prefix| endpoint.strip_prefix(*prefix))
                    .unwrap_or(endpoint.as_str())
                    .to_owned()
            })
            .collect();

        let distinct = short.iter().collect::<BTreeSet<_>>().len();
        if distinct == short.len() {
            short
        } else {
            self.endpoints.clone()
        }
    }
}
