mod analytics;
mod args;
mod config;
mod discovery;
mod error;
mod logging;
mod plot;
mod runner;
mod source;

use crate::args::AnalyzerArgs;
use crate::config::AnalyzerConfig;
use crate::discovery::Discovery;
use crate::error::AnalyzerError;
use crate::logging::Logging;
use crate::runner::AnalysisRunner;
use crate::source::JtlCsvSource;
use clap::Parser;
use figlet_rs::FIGfont;
use loadtest_report::PRINT_TARGET;
use std::path::Path;
use tracing::{event, info, warn, Level};

fn main() -> Result<(), AnalyzerError> {
    let args = AnalyzerArgs::parse();
    let mut logging = Logging::new();
    logging.init(args.quiet, &args.log_file)?;

    print_banner();

    let mut config = AnalyzerConfig::load(args.config.as_deref())?;
    config.apply_args(&args);
    config.validate()?;
    info!("Configuration: {config}");

    let inputs = match discovery::discover(
        &args.inputs,
        args.scan_dir.as_deref(),
        &config.default_input,
    )? {
        Discovery::Runs(inputs) => inputs,
        Discovery::MissingDefault(path) => {
            warn!("Result log {} not found", path.display());
            print_instructions(&path);
            return Ok(());
        }
    };

    info!("Analyzing {} run(s)...", inputs.len());
    let runner = AnalysisRunner::new(JtlCsvSource::with_delimiter(args.delimiter), config);
    runner.run(&inputs)?;
    Ok(())
}

fn print_banner() {
    let Ok(font) = FIGfont::standard() else {
        return;
    };
    if let Some(figure) = font.convert("Load Test Analyzer") {
        event!(target: PRINT_TARGET, Level::INFO, "{}", figure);
    }
}

fn print_instructions(path: &Path) {
    event!(
        target: PRINT_TARGET,
        Level::INFO,
        "No result log found at {path}.\n\n\
         To produce one, run the load test in non-GUI mode, e.g.:\n\
         \x20   jmeter -n -t <test-plan>.jmx -l {path}\n\n\
         Then run the analyzer again, or point it at existing logs with \
         --input [NAME=]PATH or --scan-dir DIR.",
        path = path.display()
    );
}
