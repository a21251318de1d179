use super::{error_rate_by_severity, THROUGHPUT_COLOR, TIME_COLOR};
use crate::plotting::chart::{Panel, PanelLayout, ReportChart};
use crate::plotting::{chart_kind::ChartKind, style::ChartStyle};
use crate::report::AnalysisReport;
use charming::Chart;

pub(crate) fn create(report: &AnalysisReport, style: &ChartStyle) -> Chart {
    let runs = &report.runs;
    let names = runs.names();
    let panel = |row, col, label: &str, title: &str| {
        Panel::new(PanelLayout::cell(row, col, 2, 2), names.clone(), label)
            .titled(title)
            .horizontal()
    };

    let mut chart = ReportChart::new(
        &report.title(ChartKind::PerformanceComparison),
        &report.subtext(),
        style,
    )
    .with_panel(panel(0, 0, "ms", "Average Response Time"))
    .with_panel(panel(0, 1, "Error (%)", "Error Rate"))
    .with_panel(panel(1, 0, "req/s", "Throughput"))
    .with_panel(panel(1, 1, "Requests", "Total Requests"))
    .add_bar_series(
        0,
        "Average Time",
        runs.values(|m| m.avg_response_time),
        Some(TIME_COLOR),
        None,
    );

    for (label, color, data) in error_rate_by_severity(report, style) {
        chart = chart.add_bar_series(
            1,
            &format!("Error Rate {label}"),
            data,
            Some(color),
            Some("error_rate"),
        );
    }

    chart
        .add_bar_series(
            2,
            "Throughput",
            runs.values(|m| m.throughput),
            Some(THROUGHPUT_COLOR),
            None,
        )
        .add_bar_series(
            3,
            "Total Requests",
            runs.values(|m| m.total_requests as f64),
            Some("#800080"),
            None,
        )
        .build()
}
