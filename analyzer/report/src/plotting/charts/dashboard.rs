use super::{
    error_rate_by_severity, MAX_TIME_COLOR, P90_COLOR, P95_COLOR, P99_COLOR, THROUGHPUT_COLOR,
    TIME_COLOR,
};
use crate::plotting::chart::{Panel, PanelLayout, ReportChart};
use crate::plotting::{chart_kind::ChartKind, style::ChartStyle};
use crate::report::AnalysisReport;
use charming::Chart;

const ROWS: usize = 3;
const COLS: usize = 3;

/// Overview of every run on a 3x3 grid: volume, errors and throughput on
/// top, response times and outcomes below.
pub(crate) fn create(report: &AnalysisReport, style: &ChartStyle) -> Chart {
    let runs = &report.runs;
    let names = runs.names();
    let points = names.len();
    let cell = |row, col, label: &str, title: &str| {
        Panel::new(PanelLayout::cell(row, col, ROWS, COLS), names.clone(), label).titled(title)
    };
    let wide_cell = |row, col, span, label: &str, title: &str| {
        Panel::new(
            PanelLayout::wide_cell(row, col, span, ROWS, COLS),
            names.clone(),
            label,
        )
        .titled(title)
    };

    let mut chart = ReportChart::new(
        &report.title(ChartKind::Dashboard),
        &report.subtext(),
        style,
    )
    .with_panel(cell(0, 0, "Requests", "Total Requests"))
    .with_panel(cell(0, 1, "Error (%)", "Error Rate (%)"))
    .with_panel(cell(0, 2, "req/s", "Throughput (req/s)"))
    .with_panel(wide_cell(1, 0, 3, "ms", "Average vs Maximum Response Time (ms)").log_scale())
    .with_panel(cell(2, 0, "Requests", "Successes and Failures"))
    .with_panel(wide_cell(2, 1, 2, "ms", "Response Time Percentiles (ms)"));

    chart = chart.add_bar_series(
        0,
        "Total Requests",
        runs.values(|m| m.total_requests as f64),
        Some("#5b3fa8"),
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
    chart = chart
        .add_threshold_line(1, "Acceptable Limit", style.acceptable_error_rate, points, "#f39c12")
        .add_threshold_line(1, "Critical Limit", style.critical_error_rate, points, "#d62728");

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
            "Average Time",
            runs.values(|m| m.avg_response_time),
            Some(TIME_COLOR),
            None,
        )
        .add_bar_series(
            3,
            "Maximum Time",
            runs.values(|m| m.max_response_time),
            Some(MAX_TIME_COLOR),
            None,
        )
        .add_bar_series(
            4,
            "Successes",
            runs.values(|m| m.success_requests as f64),
            Some("#2e9e44"),
            Some("outcome"),
        )
        .add_bar_series(
            4,
            "Failures",
            runs.values(|m| m.failed_requests as f64),
            Some("#d62728"),
            Some("outcome"),
        )
        .add_bar_series(5, "P90", runs.values(|m| m.p90), Some(P90_COLOR), None)
        .add_bar_series(5, "P95", runs.values(|m| m.p95), Some(P95_COLOR), None)
        .add_bar_series(5, "P99", runs.values(|m| m.p99), Some(P99_COLOR), None)
        .build()
}
