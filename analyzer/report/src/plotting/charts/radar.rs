use crate::comparison::RadarScores;
use crate::plotting::chart::ReportChart;
use crate::plotting::{chart_kind::ChartKind, style::ChartStyle};
use crate::report::AnalysisReport;
use charming::{component::RadarCoordinate, series::Radar, Chart};

pub(crate) fn create(report: &AnalysisReport, style: &ChartStyle) -> Chart {
    let scores = RadarScores::for_runs(&report.runs);

    let indicators: Vec<(&str, i64, i64)> = RadarScores::AXES
        .iter()
        .map(|axis| (*axis, 0, 100))
        .collect();

    let data: Vec<(Vec<f64>, &str)> = scores
        .iter()
        .map(|(name, scores)| (scores.as_vec(), name.as_str()))
        .collect();

    ReportChart::new(&report.title(ChartKind::Radar), &report.subtext(), style)
        .build()
        .radar(RadarCoordinate::new().indicator(indicators))
        .series(Radar::new().name("Normalized Scores").data(data))
}
