use super::{MAX_TIME_COLOR, P90_COLOR, P95_COLOR, P99_COLOR, TIME_COLOR};
use crate::plotting::chart::{Panel, PanelLayout, ReportChart};
use crate::plotting::{chart_kind::ChartKind, style::ChartStyle};
use crate::report::AnalysisReport;
use charming::Chart;

pub(crate) fn create(report: &AnalysisReport, style: &ChartStyle) -> Chart {
    let runs = &report.runs;

    ReportChart::new(
        &report.title(ChartKind::TimeDistribution),
        &report.subtext(),
        style,
    )
    .with_panel(Panel::new(PanelLayout::full(), runs.names(), "Time (ms)").log_scale())
    .add_bar_series(0, "Minimum", runs.values(|m| m.min_response_time), Some("#73c0de"), None)
    .add_bar_series(0, "Average", runs.values(|m| m.avg_response_time), Some(TIME_COLOR), None)
    .add_bar_series(0, "P90", runs.values(|m| m.p90), Some(P90_COLOR), None)
    .add_bar_series(0, "P95", runs.values(|m| m.p95), Some(P95_COLOR), None)
    .add_bar_series(0, "P99", runs.values(|m| m.p99), Some(P99_COLOR), None)
    .add_bar_series(0, "Maximum", runs.values(|m| m.max_response_time), Some(MAX_TIME_COLOR), None)
    .build()
}
