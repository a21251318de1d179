use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ChartKind {
    #[display("Dashboard")]
    Dashboard,
    #[display("Performance Comparison")]
    PerformanceComparison,
    #[display("Percentile Distribution")]
    PercentileDistribution,
    #[display("Error Rate And Throughput")]
    ErrorRateThroughput,
    #[display("Endpoint Heatmap")]
    EndpointHeatmap,
    #[display("Scalability")]
    Scalability,
    #[display("Time Distribution")]
    TimeDistribution,
    #[display("Performance Radar")]
    Radar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 8] = [
        ChartKind::Dashboard,
        ChartKind::PerformanceComparison,
        ChartKind::PercentileDistribution,
        ChartKind::ErrorRateThroughput,
        ChartKind::EndpointHeatmap,
        ChartKind::Scalability,
        ChartKind::TimeDistribution,
        ChartKind::Radar,
    ];

    /// Output file name without extension.
    pub fn file_name(&self) -> &'static str {
        match self {
            ChartKind::Dashboard => "01-dashboard",
            ChartKind::PerformanceComparison => "02-performance-comparison",
            ChartKind::PercentileDistribution => "03-percentile-distribution",
            ChartKind::ErrorRateThroughput => "04-error-rate-throughput",
            ChartKind::EndpointHeatmap => "05-endpoint-heatmap",
            ChartKind::Scalability => "06-scalability",
            ChartKind::TimeDistribution => "07-time-distribution",
            ChartKind::Radar => "08-radar",
        }
    }
}
