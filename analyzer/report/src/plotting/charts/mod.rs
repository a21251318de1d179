mod dashboard;
mod endpoint_heatmap;
mod error_rate_throughput;
mod percentile_distribution;
mod performance_comparison;
mod radar;
mod scalability;
mod time_distribution;

use super::{chart_kind::ChartKind, style::ChartStyle};
use crate::report::AnalysisReport;
use charming::Chart;

pub(crate) const P50_COLOR: &str = "#5470c6";
pub(crate) const P90_COLOR: &str = "#91cc75";
pub(crate) const P95_COLOR: &str = "#fac858";
pub(crate) const P99_COLOR: &str = "#ee6666";
pub(crate) const THROUGHPUT_COLOR: &str = "#20a39e";
pub(crate) const TIME_COLOR: &str = "#4682b4";
pub(crate) const MAX_TIME_COLOR: &str = "#ff7f50";

/// Builds the chart of the given kind from an already computed report.
pub fn create_chart(report: &AnalysisReport, kind: ChartKind, style: &ChartStyle) -> Chart {
    match kind {
        ChartKind::Dashboard => dashboard::create(report, style),
        ChartKind::PerformanceComparison => performance_comparison::create(report, style),
        ChartKind::PercentileDistribution => percentile_distribution::create(report, style),
        ChartKind::ErrorRateThroughput => error_rate_throughput::create(report, style),
        ChartKind::EndpointHeatmap => endpoint_heatmap::create(report, style),
        ChartKind::Scalability => scalability::create(report, style),
        ChartKind::TimeDistribution => time_distribution::create(report, style),
        ChartKind::Radar => radar::create(report, style),
    }
}

/// Splits per-run error rates into one series per severity, so that each bar
/// is colored by how bad its error rate is.
pub(crate) fn error_rate_by_severity(
    report: &AnalysisReport,
    style: &ChartStyle,
) -> Vec<(String, &'static str, Vec<f64>)> {
    let error_rates = report.runs.values(|m| m.error_rate);
    super::style::ErrorSeverity::ALL
        .iter()
        .map(|severity| {
            let data = error_rates
                .iter()
                .map(|rate| {
                    if style.severity(*rate) == *severity {
                        *rate
                    } else {
                        0.0
                    }
                })
                .collect();
            (style.severity_label(*severity), severity.color(), data)
        })
        .collect()
}
