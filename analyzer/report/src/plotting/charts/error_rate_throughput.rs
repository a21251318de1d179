use super::THROUGHPUT_COLOR;
use crate::plotting::chart::{Panel, PanelLayout, ReportChart};
use crate::plotting::{chart_kind::ChartKind, style::ChartStyle};
use crate::report::AnalysisReport;
use charming::{element::Symbol, Chart};

pub(crate) fn create(report: &AnalysisReport, style: &ChartStyle) -> Chart {
    let runs = &report.runs;
    let names = runs.names();
    let points = names.len();

    ReportChart::new(
        &report.title(ChartKind::ErrorRateThroughput),
        &report.subtext(),
        style,
    )
    .with_panel(
        Panel::new(PanelLayout::cell(0, 0, 1, 2), names.clone(), "Error Rate (%)")
            .titled("Error Rate Trend"),
    )
    .with_panel(
        Panel::new(PanelLayout::cell(0, 1, 1, 2), names, "Throughput (req/s)")
            .titled("Throughput Trend"),
    )
    .add_line_series(
        0,
        "Error Rate",
        runs.values(|m| m.error_rate),
        Symbol::Circle,
        "#d62728",
        true,
    )
    .add_threshold_line(
        0,
        &format!("Acceptable Limit ({}%)", style.acceptable_error_rate),
        style.acceptable_error_rate,
        points,
        "#f39c12",
    )
    .add_threshold_line(
        0,
        &format!("Critical Limit ({}%)", style.critical_error_rate),
        style.critical_error_rate,
        points,
        "#8b0000",
    )
    .add_line_series(
        1,
        "Throughput",
        runs.values(|m| m.throughput),
        Symbol::Rect,
        THROUGHPUT_COLOR,
        true,
    )
    .build()
}
