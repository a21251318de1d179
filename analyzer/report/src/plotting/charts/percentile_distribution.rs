use super::{P50_COLOR, P90_COLOR, P95_COLOR, P99_COLOR};
use crate::plotting::chart::{Panel, PanelLayout, ReportChart};
use crate::plotting::{chart_kind::ChartKind, style::ChartStyle};
use crate::report::AnalysisReport;
use charming::Chart;

pub(crate) fn create(report: &AnalysisReport, style: &ChartStyle) -> Chart {
    let runs = &report.runs;

    ReportChart::new(
        &report.title(ChartKind::PercentileDistribution),
        &report.subtext(),
        style,
    )
    .with_panel(Panel::new(PanelLayout::full(), runs.names(), "Response Time (ms)"))
    .add_bar_series(0, "P50 (Median)", runs.values(|m| m.p50), Some(P50_COLOR), None)
    .add_bar_series(0, "P90", runs.values(|m| m.p90), Some(P90_COLOR), None)
    .add_bar_series(0, "P95", runs.values(|m| m.p95), Some(P95_COLOR), None)
    .add_bar_series(0, "P99", runs.values(|m| m.p99), Some(P99_COLOR), None)
    .build()
}
