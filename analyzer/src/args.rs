use crate::discovery::RunInput;
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct AnalyzerArgs {
    /// Result log to analyze, as `NAME=PATH` or just `PATH` (the file stem becomes the run name).
    /// Can be repeated to compare several runs.
    #[arg(long = "input", short = 'i', value_name = "[NAME=]PATH", value_parser = parse_run_input)]
    pub inputs: Vec<RunInput>,

    /// Directory scanned for `*.jtl` and `*.csv` result logs, one run per file
    #[arg(long, short = 'd')]
    pub scan_dir: Option<PathBuf>,

    /// Output directory for charts and reports, overrides the configuration
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// Configuration file path, `configs/analyzer.toml` is used when present
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Number of report lines printed to the console after the analysis
    #[arg(long)]
    pub preview_lines: Option<usize>,

    /// Render charts with the light theme
    #[arg(long, default_value_t = false)]
    pub light_theme: bool,

    /// Field delimiter of the result logs
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Suppress console output, logs on stderr are not affected
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,

    /// Write debug logs to the given file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn parse_run_input(value: &str) -> Result<RunInput, String> {
    RunInput::from_str(value)
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(delimiter), None) if delimiter.is_ascii() => Ok(delimiter as u8),
        _ => Err(format!(
            "Delimiter must be a single ASCII character, got '{value}'"
        )),
    }
}
