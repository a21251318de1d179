use crate::report::AnalysisReport;
use human_repr::HumanCount;

impl AnalysisReport {
    pub fn subtext(&self) -> String {
        let total_requests = self.runs.total_requests();
        let failed_requests: u64 = self
            .runs
            .iter()
            .map(|run| run.metrics.failed_requests)
            .sum();
        let overall_error_rate = if total_requests > 0 {
            failed_requests as f64 / total_requests as f64 * 100.0
        } else {
            0.0
        };
        let empty_runs = self.runs.iter().filter(|run| run.metrics.is_empty()).count();

        let mut parts = vec![
            format!("{} Runs", self.runs.len()),
            format!("{} Requests", total_requests.human_count_bare()),
            format!("Overall Error Rate: {:.2}%", overall_error_rate),
        ];
        if empty_runs > 0 {
            parts.push(format!("{empty_runs} Runs Without Data"));
        }
        parts.push(self.timestamp.format("%Y-%m-%d %H:%M UTC").to_string());

        parts.join("  •  ")
    }
}
