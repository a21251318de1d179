use crate::{
    plotting::style::{ChartStyle, ErrorSeverity},
    report::AnalysisReport,
    run_set::NamedRun,
    PRINT_TARGET,
};
use colored::{Color, ColoredString, Colorize};
use tracing::{event, Level};

impl AnalysisReport {
    pub fn print_summary(&self, style: &ChartStyle) {
        let header = format!(
            "Analyzed {} run(s), {} request(s) in total",
            self.runs.len(),
            self.runs.total_requests()
        )
        .blue();
        event!(target: PRINT_TARGET, Level::INFO, "{}", header);

        for run in self.runs.iter() {
            event!(target: PRINT_TARGET, Level::INFO, "{}", run.formatted_string(style));
        }
    }
}

impl NamedRun {
    pub fn formatted_string(&self, style: &ChartStyle) -> ColoredString {
        let m = &self.metrics;
        let color = summary_color(style.severity(m.error_rate));

        format!(
            "{}: {} requests, error rate: {:.2}%, throughput: {:.2} req/s, \
            average: {:.2} ms, p50: {:.2} ms, p90: {:.2} ms, p95: {:.2} ms, p99: {:.2} ms, \
            endpoints: {}",
            self.name,
            m.total_requests,
            m.error_rate,
            m.throughput,
            m.avg_response_time,
            m.p50,
            m.p90,
            m.p95,
            m.p99,
            m.endpoints.len(),
        )
        .color(color)
    }
}

fn summary_color(severity: ErrorSeverity) -> Color {
    match severity {
        ErrorSeverity::Acceptable => Color::Green,
        ErrorSeverity::Elevated => Color::Yellow,
        ErrorSeverity::Critical => Color::Red,
    }
}
