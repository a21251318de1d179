use crate::args::AnalyzerArgs;
use crate::error::AnalyzerError;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use loadtest_report::ChartStyle;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "configs/analyzer.toml";
const ENV_PREFIX: &str = "LOADTEST_";
const ENV_NESTING_SEPARATOR: &str = "__";

pub const DEFAULT_INPUT: &str = "tests/jmeter/results.jtl";
pub const DEFAULT_OUTPUT_DIR: &str = "analysis-charts";
pub const DEFAULT_PREVIEW_LINES: usize = 30;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Result log analyzed when no input is given on the command line
    pub default_input: PathBuf,
    pub output_dir: PathBuf,
    /// Lines of the text report echoed to the console
    pub preview_lines: usize,
    pub chart: ChartStyle,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            default_input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            preview_lines: DEFAULT_PREVIEW_LINES,
            chart: ChartStyle::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Layers defaults, the TOML file and `LOADTEST_*` environment variables,
    /// e.g. `LOADTEST_CHART__DARK_THEME=false`.
    ///
    /// An explicitly requested file must exist, the default one is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, AnalyzerError> {
        let path = match path {
            Some(path) if !path.is_file() => {
                return Err(AnalyzerError::CannotLoadConfiguration(format!(
                    "configuration file {} does not exist",
                    path.display()
                )));
            }
            Some(path) => path,
            None => Path::new(DEFAULT_CONFIG_PATH),
        };

        let mut figment = Figment::from(Serialized::defaults(AnalyzerConfig::default()));
        if path.is_file() {
            info!("Loading configuration from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        let config: AnalyzerConfig = figment
            .merge(Env::prefixed(ENV_PREFIX).split(ENV_NESTING_SEPARATOR))
            .extract()
            .map_err(|e| AnalyzerError::CannotLoadConfiguration(e.to_string()))?;

        Ok(config)
    }

    /// Command line flags take precedence over every other source.
    pub fn apply_args(&mut self, args: &AnalyzerArgs) {
        if let Some(output_dir) = &args.output_dir {
            self.output_dir = output_dir.clone();
        }
        if let Some(preview_lines) = args.preview_lines {
            self.preview_lines = preview_lines;
        }
        if args.light_theme {
            self.chart.dark_theme = false;
        }
    }

    pub fn validate(&self) -> Result<(), AnalyzerError> {
        let chart = &self.chart;
        if chart.width == 0 || chart.height == 0 {
            error!("Chart configuration -> width and height must be greater than 0.");
            return Err(AnalyzerError::InvalidConfiguration(format!(
                "chart size {}x{}",
                chart.width, chart.height
            )));
        }

        let in_range = |rate: f64| (0.0..=100.0).contains(&rate);
        if !in_range(chart.acceptable_error_rate) || !in_range(chart.critical_error_rate) {
            error!("Chart configuration -> error rate thresholds must be within 0 and 100.");
            return Err(AnalyzerError::InvalidConfiguration(
                "error rate thresholds out of range".to_owned(),
            ));
        }

        if chart.acceptable_error_rate > chart.critical_error_rate {
            error!(
                "Chart configuration -> acceptable error rate ({}%) cannot exceed the critical one ({}%).",
                chart.acceptable_error_rate, chart.critical_error_rate
            );
            return Err(AnalyzerError::InvalidConfiguration(
                "acceptable error rate above critical error rate".to_owned(),
            ));
        }

        Ok(())
    }
}

impl Display for AnalyzerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ default_input: {}, output_dir: {}, preview_lines: {}, chart: {{ dark_theme: {}, size: {}x{}, acceptable_error_rate: {}%, critical_error_rate: {}% }} }}",
            self.default_input.display(),
            self.output_dir.display(),
            self.preview_lines,
            self.chart.dark_theme,
            self.chart.width,
            self.chart.height,
            self.chart.acceptable_error_rate,
            self.chart.critical_error_rate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;
    use std::env;
    use std::io::Write;

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    #[serial]
    fn should_fall_back_to_defaults() {
        let config = AnalyzerConfig::load(None).unwrap();

        assert_eq!(config, AnalyzerConfig::default());
        assert_eq!(config.preview_lines, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn should_merge_file_over_defaults() {
        let file = config_file(
            r#"
            output_dir = "reports"

            [chart]
            dark_theme = false
            width = 800
            "#,
        );

        let config = AnalyzerConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.output_dir, PathBuf::from("reports"));
        assert!(!config.chart.dark_theme);
        assert_eq!(config.chart.width, 800);
        assert_eq!(config.chart.height, 1200);
        assert_eq!(config.default_input, PathBuf::from(DEFAULT_INPUT));
    }

    // Environment variables are process wide, hence serial.
    #[test]
    #[serial]
    fn environment_should_override_file() {
        let file = config_file("preview_lines = 10\n[chart]\ncritical_error_rate = 50.0\n");
        env::set_var("LOADTEST_PREVIEW_LINES", "5");
        env::set_var("LOADTEST_CHART__CRITICAL_ERROR_RATE", "25.5");

        let config = AnalyzerConfig::load(Some(file.path()));

        env::remove_var("LOADTEST_PREVIEW_LINES");
        env::remove_var("LOADTEST_CHART__CRITICAL_ERROR_RATE");

        let config = config.unwrap();
        assert_eq!(config.preview_lines, 5);
        assert_eq!(config.chart.critical_error_rate, 25.5);
    }

    #[test]
    #[serial]
    fn should_fail_on_missing_explicit_file() {
        let result = AnalyzerConfig::load(Some(Path::new("/no/such/analyzer.toml")));
        assert!(matches!(
            result,
            Err(AnalyzerError::CannotLoadConfiguration(_))
        ));
    }

    #[test]
    #[serial]
    fn should_fail_on_mistyped_value() {
        let file = config_file("preview_lines = \"many\"\n");
        assert!(matches!(
            AnalyzerConfig::load(Some(file.path())),
            Err(AnalyzerError::CannotLoadConfiguration(_))
        ));
    }

    #[test]
    fn args_should_take_precedence() {
        let args = AnalyzerArgs::parse_from([
            "loadtest-analyzer",
            "-o",
            "out",
            "--preview-lines",
            "3",
            "--light-theme",
        ]);
        let mut config = AnalyzerConfig::default();

        config.apply_args(&args);

        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.preview_lines, 3);
        assert!(!config.chart.dark_theme);
    }

    #[test]
    fn should_reject_invalid_chart_settings() {
        let mut config = AnalyzerConfig::default();
        config.chart.width = 0;
        assert!(config.validate().is_err());

        let mut config = AnalyzerConfig::default();
        config.chart.acceptable_error_rate = 120.0;
        assert!(config.validate().is_err());

        let mut config = AnalyzerConfig::default();
        config.chart.acceptable_error_rate = 30.0;
        config.chart.critical_error_rate = 10.0;
        assert!(matches!(
            config.validate(),
            Err(AnalyzerError::InvalidConfiguration(_))
        ));
    }
}
