use crate::{plotting::chart_kind::ChartKind, report::AnalysisReport};

/// Returns a title for an analysis chart
impl AnalysisReport {
    pub fn title(&self, kind: ChartKind) -> String {
        match self.runs.len() {
            1 => format!("{} - Load Test Analysis", kind),
            runs => format!("{} - Load Test Analysis ({} Runs)", kind, runs),
        }
    }
}
