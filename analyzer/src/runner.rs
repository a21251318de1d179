use crate::analytics::metrics::run;
use crate::analytics::report_builder::AnalysisReportBuilder;
use crate::config::AnalyzerConfig;
use crate::discovery::RunInput;
use crate::error::AnalyzerError;
use crate::plot::plot_chart;
use crate::source::RecordSource;
use loadtest_report::report::{AnalysisReport, REPORT_JSON_FILE, REPORT_TEXT_FILE};
use loadtest_report::run_set::RunSet;
use loadtest_report::{ChartKind, PRINT_TARGET};
use std::path::Path;
use tracing::{error, event, info, Level};

/// Loads every run, computes its metrics and writes all artifacts.
pub struct AnalysisRunner<S: RecordSource> {
    source: S,
    config: AnalyzerConfig,
}

impl<S: RecordSource> AnalysisRunner<S> {
    pub fn new(source: S, config: AnalyzerConfig) -> Self {
        Self { source, config }
    }

    pub fn run(&self, inputs: &[RunInput]) -> Result<AnalysisReport, AnalyzerError> {
        let runs = self.compute_runs(inputs);
        let report = AnalysisReportBuilder::build(runs);
        report.print_summary(&self.config.chart);

        let output_dir = self.config.output_dir.as_path();
        std::fs::create_dir_all(output_dir).map_err(|source| {
            AnalyzerError::CannotCreateOutputDirectory {
                path: output_dir.to_path_buf(),
                source,
            }
        })?;

        let failed = self.write_artifacts(&report, output_dir);
        if failed > 0 {
            error!(
                "{} artifact(s) could not be generated in {}",
                failed,
                output_dir.display()
            );
            return Err(AnalyzerError::ArtifactsFailed(failed));
        }

        info!("Analysis finished, results saved in {}", output_dir.display());
        Ok(report)
    }

    fn compute_runs(&self, inputs: &[RunInput]) -> RunSet {
        let mut runs = RunSet::new();
        for input in inputs {
            let records = match self.source.load(&input.path) {
                Ok(records) => records,
                Err(e) => {
                    error!("{e}. Run '{}' is reported with empty metrics.", input.name);
                    Vec::new()
                }
            };

            let metrics = run::from_records(&records);
            info!(
                "Computed metrics for run {}: {} requests, {} endpoint(s)",
                input,
                metrics.total_requests,
                metrics.endpoints.len()
            );
            let source = Some(input.path.display().to_string());
            runs.insert(&input.name, source, metrics);
        }
        runs
    }

    /// Writes every chart, the JSON dump and the text report, returning how many failed.
    fn write_artifacts(&self, report: &AnalysisReport, output_dir: &Path) -> usize {
        let mut failed = 0;

        for kind in ChartKind::ALL {
            if let Err(e) = plot_chart(report, output_dir, kind, &self.config.chart) {
                error!("Cannot generate {} chart: {}", kind, e);
                failed += 1;
            }
        }

        match report.dump_to_json(output_dir) {
            Ok(path) => info!("Saved analysis dump at: {}", path.display()),
            Err(e) => {
                error!("Cannot write {}: {}", REPORT_JSON_FILE, e);
                failed += 1;
            }
        }

        match report.save_text(output_dir) {
            Ok((path, text)) => {
                info!("Saved text report at: {}", path.display());
                self.print_preview(&text);
            }
            Err(e) => {
                error!("Cannot write {}: {}", REPORT_TEXT_FILE, e);
                failed += 1;
            }
        }

        failed
    }

    fn print_preview(&self, text: &str) {
        let limit = self.config.preview_lines;
        if limit == 0 {
            return;
        }

        let total = text.lines().count();
        let mut preview = text.lines().take(limit).collect::<Vec<_>>().join("\n");
        if total > limit {
            preview.push_str(&format!(
                "\n... {} more line(s) in {}",
                total - limit,
                REPORT_TEXT_FILE
            ));
        }
        event!(target: PRINT_TARGET, Level::INFO, "\n{preview}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::record::RequestRecord;
    use crate::error::LoadError;
    use chrono::{DateTime, Utc};
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// In-memory source keyed by path; unknown paths fail to load.
    struct FixedSource(HashMap<PathBuf, Vec<RequestRecord>>);

    impl RecordSource for FixedSource {
        fn load(&self, path: &Path) -> Result<Vec<RequestRecord>, LoadError> {
            self.0
                .get(path)
                .cloned()
                .ok_or_else(|| LoadError::Empty {
                    path: path.to_path_buf(),
                })
        }
    }

    fn record(ms: i64, elapsed: f64, endpoint: &str, success: bool) -> RequestRecord {
        RequestRecord {
            timestamp: DateTime::<Utc>::from_timestamp_millis(ms),
            response_time: Some(elapsed),
            endpoint: Some(endpoint.to_owned()),
            success: Some(success),
        }
    }

    fn runner(output_dir: &Path) -> AnalysisRunner<FixedSource> {
        let records = vec![
            record(0, 100.0, "GET /", true),
            record(1000, 300.0, "GET /", false),
            record(2000, 200.0, "POST /", true),
        ];
        let source = FixedSource(HashMap::from([(PathBuf::from("good.jtl"), records)]));
        let config = AnalyzerConfig {
            output_dir: output_dir.to_path_buf(),
            ..Default::default()
        };
        AnalysisRunner::new(source, config)
    }

    #[test]
    fn should_write_all_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("charts");
        let inputs = vec!["good=good.jtl".parse().unwrap()];

        let report = runner(&output_dir).run(&inputs).unwrap();

        let metrics = report.runs.get("good").unwrap();
        assert_eq!(metrics.total_requests, 3);
        assert_eq!(metrics.endpoints.len(), 2);
        for kind in ChartKind::ALL {
            assert!(output_dir.join(format!("{}.html", kind.file_name())).is_file());
        }
        assert!(output_dir.join(REPORT_JSON_FILE).is_file());
        let text = std::fs::read_to_string(output_dir.join(REPORT_TEXT_FILE)).unwrap();
        assert!(text.contains("GOOD"));
    }

    #[test]
    fn unloadable_run_should_be_reported_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = vec![
            "good=good.jtl".parse().unwrap(),
            "broken=missing.jtl".parse().unwrap(),
        ];

        let report = runner(dir.path()).run(&inputs).unwrap();

        assert_eq!(report.runs.len(), 2);
        assert!(report.runs.get("broken").unwrap().is_empty());
        assert_eq!(report.runs.get("good").unwrap().total_requests, 3);
    }

    #[test]
    fn duplicate_run_names_should_be_kept_apart() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = vec![
            "run=good.jtl".parse().unwrap(),
            "run=good.jtl".parse().unwrap(),
        ];

        let report = runner(dir.path()).run(&inputs).unwrap();

        assert_eq!(report.runs.names(), vec!["run", "run (2)"]);
    }

    #[test]
    fn should_fail_when_output_directory_cannot_be_created() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();

        let result = runner(&blocker.join("charts")).run(&[]);

        assert!(matches!(
            result,
            Err(AnalyzerError::CannotCreateOutputDirectory { .. })
        ));
    }
}
