use crate::{report::AnalysisReport, run_set::NamedRun};
use chrono::Local;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use num_format::{Locale, ToFormattedString};

pub const REPORT_WIDTH: usize = 100;

impl AnalysisReport {
    /// Renders the fixed-width, human readable report of all runs.
    pub fn to_text(&self) -> String {
        let heavy = "=".repeat(REPORT_WIDTH);
        let light = "-".repeat(REPORT_WIDTH);
        let generated_at = self.timestamp.with_timezone(&Local);

        let mut lines = vec![
            heavy.clone(),
            format!("{:^width$}", "LOAD TEST ANALYSIS - DETAILED REPORT", width = REPORT_WIDTH),
            heavy.clone(),
            String::new(),
            format!("Generated: {}", generated_at.format("%d/%m/%Y %H:%M:%S")),
            format!("Runs analyzed: {}", self.runs.len()),
            String::new(),
        ];

        for run in self.runs.iter() {
            lines.push(light.clone());
            lines.push(run.name.to_uppercase());
            if let Some(source) = &run.source {
                lines.push(format!("Source: {source}"));
            }
            lines.push(light.clone());
            lines.extend(run_section(run));
            lines.push(String::new());
        }

        lines.push(heavy.clone());
        lines.push(format!("{:^width$}", "END OF REPORT", width = REPORT_WIDTH));
        lines.push(heavy);
        lines.join("\n")
    }
}

fn run_section(run: &NamedRun) -> Vec<String> {
    let m = &run.metrics;
    let count = |label: &str, value: u64| {
        format!("  {:<28}{:>20}", label, value.to_formatted_string(&Locale::en))
    };
    let float = |label: &str, value: f64, unit: &str| {
        format!("  {:<28}{:>20.2}{}", label, value, unit)
    };

    let mut lines = vec![
        String::new(),
        "GENERAL METRICS".to_owned(),
        count("Total Requests:", m.total_requests),
        count("Successful Requests:", m.success_requests),
        count("Failed Requests:", m.failed_requests),
        float("Error Rate:", m.error_rate, "%"),
        float("Throughput:", m.throughput, " req/s"),
        String::new(),
        "RESPONSE TIMES (ms)".to_owned(),
        float("Minimum:", m.min_response_time, ""),
        float("Average:", m.avg_response_time, ""),
        float("Maximum:", m.max_response_time, ""),
        float("P50 (Median):", m.p50, ""),
        float("P90:", m.p90, ""),
        float("P95:", m.p95, ""),
        float("P99:", m.p99, ""),
    ];

    if !m.endpoints.is_empty() {
        lines.push(String::new());
        lines.push("ENDPOINT BREAKDOWN".to_owned());
        lines.extend(
            endpoint_table(run)
                .to_string()
                .lines()
                .map(|line| format!("  {line}")),
        );
    }

    lines
}

fn endpoint_table(run: &NamedRun) -> Table {
    let mut table = Table::new();
    // Indented by two columns in the report.
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width((REPORT_WIDTH - 2) as u16);
    table.set_header(vec![
        "Endpoint",
        "Requests",
        "Avg Time (ms)",
        "Max Time (ms)",
        "Error Rate (%)",
    ]);

    for (endpoint, metrics) in &run.metrics.endpoints {
        table.add_row(vec![
            endpoint.clone(),
            metrics.count.to_formatted_string(&Locale::en),
            format!("{:.2}", metrics.avg_time),
            format!("{:.2}", metrics.max_time),
            format!("{:.2}", metrics.error_rate),
        ]);
    }

    for index in 1..5 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table
}
