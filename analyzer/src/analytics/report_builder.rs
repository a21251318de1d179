use chrono::Utc;
use loadtest_report::{report::AnalysisReport, run_set::RunSet};

pub struct AnalysisReportBuilder;

impl AnalysisReportBuilder {
    pub fn build(runs: RunSet) -> AnalysisReport {
        let uuid = uuid::Uuid::new_v4();
        AnalysisReport::new(uuid, Utc::now(), runs)
    }
}
