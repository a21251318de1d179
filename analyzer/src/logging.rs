use crate::error::AnalyzerError;
use loadtest_report::PRINT_TARGET;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::{self},
    layer::{Layer, SubscriberExt},
    EnvFilter,
};

const DEFAULT_LOG_FILTER: &str = "info";

/// Console output goes to stdout through [`PRINT_TARGET`], diagnostics go to
/// stderr and, optionally, to a log file.
pub(crate) struct Logging {
    file_guard: Option<WorkerGuard>,
    stdout_guard: Option<WorkerGuard>,
}

impl Logging {
    pub(crate) fn new() -> Self {
        Logging {
            file_guard: None,
            stdout_guard: None,
        }
    }

    pub(crate) fn init(
        &mut self,
        quiet: bool,
        log_file: &Option<PathBuf>,
    ) -> Result<&mut Self, AnalyzerError> {
        let mut layers = vec![];

        let stdout_filter = filter::filter_fn(|metadata| metadata.target() == PRINT_TARGET);
        let (stdout_writer, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
        let stdout_layer = fmt::Layer::default()
            .without_time()
            .with_level(false)
            .with_target(false)
            .with_ansi(false)
            .with_writer(stdout_writer)
            .with_filter(if quiet {
                LevelFilter::OFF
            } else {
                LevelFilter::INFO
            })
            .with_filter(stdout_filter)
            .boxed();
        self.stdout_guard = Some(stdout_guard);
        layers.push(stdout_layer);

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(env_filter)
            .with_filter(filter::filter_fn(|metadata| {
                metadata.target() != PRINT_TARGET
            }))
            .boxed();
        layers.push(stderr_layer);

        if let Some(file_path) = log_file {
            let (directory, file_name) = split_log_path(file_path);
            let _ = std::fs::remove_file(file_path);
            let file_appender = tracing_appender::rolling::never(directory, file_name);
            let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(non_blocking_file)
                .with_filter(LevelFilter::DEBUG)
                .boxed();
            self.file_guard = Some(file_guard);
            layers.push(file_layer);
        }

        let subscriber = tracing_subscriber::registry().with(layers);
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| AnalyzerError::LoggingInitFailure(e.to_string()))?;

        Ok(self)
    }
}

fn split_log_path(path: &Path) -> (PathBuf, PathBuf) {
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("loadtest-analyzer.log"));
    (directory, file_name)
}
