use super::{THROUGHPUT_COLOR, TIME_COLOR};
use crate::comparison::efficiency_index;
use crate::plotting::chart::{Panel, PanelLayout, ReportChart};
use crate::plotting::{chart_kind::ChartKind, style::ChartStyle};
use crate::report::AnalysisReport;
use charming::{element::Symbol, Chart};

pub(crate) fn create(report: &AnalysisReport, style: &ChartStyle) -> Chart {
    let runs = &report.runs;
    let names = runs.names();
    let points = names.len();
    let panel = |row, col, label: &str, title: &str| {
        Panel::new(PanelLayout::cell(row, col, 2, 2), names.clone(), label).titled(title)
    };

    ReportChart::new(&report.title(ChartKind::Scalability), &report.subtext(), style)
        .with_panel(panel(0, 0, "req/s", "Throughput Scalability"))
        .with_panel(panel(0, 1, "Error (%)", "Stability Degradation"))
        .with_panel(panel(1, 0, "ms", "Performance Degradation"))
        .with_panel(panel(1, 1, "Index", "Relative Efficiency"))
        .add_line_series(
            0,
            "Throughput",
            runs.values(|m| m.throughput),
            Symbol::Circle,
            THROUGHPUT_COLOR,
            true,
        )
        .add_line_series(
            1,
            "Error Rate",
            runs.values(|m| m.error_rate),
            Symbol::Circle,
            "#d62728",
            true,
        )
        .add_threshold_line(1, "Acceptable Limit", style.acceptable_error_rate, points, "#f39c12")
        .add_line_series(
            2,
            "Average Time",
            runs.values(|m| m.avg_response_time),
            Symbol::Rect,
            TIME_COLOR,
            true,
        )
        .add_bar_series(3, "Efficiency", runs.values(efficiency_index), Some("#800080"), None)
        .build()
}
