use crate::error::AnalyzerError;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

const RESULT_LOG_EXTENSIONS: [&str; 2] = ["jtl", "csv"];

/// A named result log to analyze as one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunInput {
    pub name: String,
    pub path: PathBuf,
}

impl RunInput {
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            path: path.to_path_buf(),
        }
    }
}

impl FromStr for RunInput {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            return Err("Result log path cannot be empty".to_owned());
        }

        match value.split_once('=') {
            Some((name, path)) => {
                let (name, path) = (name.trim(), path.trim());
                if name.is_empty() || path.is_empty() {
                    return Err(format!(
                        "Invalid input '{value}', expected NAME=PATH or PATH"
                    ));
                }
                Ok(Self {
                    name: name.to_owned(),
                    path: PathBuf::from(path),
                })
            }
            None => Ok(Self::from_path(Path::new(value))),
        }
    }
}

impl Display for RunInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.path.display())
    }
}

/// What the analyzer found to work on.
#[derive(Debug, PartialEq)]
pub enum Discovery {
    Runs(Vec<RunInput>),
    /// Nothing was requested explicitly and the default result log does not exist.
    MissingDefault(PathBuf),
}

/// Resolves the runs to analyze: explicit inputs first, then the scanned
/// directory, falling back to the default result log.
pub fn discover(
    inputs: &[RunInput],
    scan_dir: Option<&Path>,
    default_input: &Path,
) -> Result<Discovery, AnalyzerError> {
    let mut runs = inputs.to_vec();

    if let Some(dir) = scan_dir {
        let scanned = scan_directory(dir)?;
        info!(
            "Found {} result log(s) in {}",
            scanned.len(),
            dir.display()
        );
        if scanned.is_empty() && inputs.is_empty() {
            return Err(AnalyzerError::NoResultLogs(dir.to_path_buf()));
        }
        runs.extend(scanned);
    }

    if !runs.is_empty() {
        return Ok(Discovery::Runs(runs));
    }

    if default_input.is_file() {
        debug!("Using default result log {}", default_input.display());
        Ok(Discovery::Runs(vec![RunInput::from_path(default_input)]))
    } else {
        Ok(Discovery::MissingDefault(default_input.to_path_buf()))
    }
}

fn scan_directory(dir: &Path) -> Result<Vec<RunInput>, AnalyzerError> {
    let scan_error = |source| AnalyzerError::CannotScanDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(scan_error)? {
        let path = entry.map_err(scan_error)?.path();
        if path.is_file() && is_result_log(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(paths.iter().map(|path| RunInput::from_path(path)).collect())
}

fn is_result_log(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            RESULT_LOG_EXTENSIONS
                .iter()
                .any(|known| extension.eq_ignore_ascii_case(known))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn should_parse_named_and_bare_inputs() {
        let named: RunInput = "peak load = results/peak.jtl".parse().unwrap();
        assert_eq!(named.name, "peak load");
        assert_eq!(named.path, PathBuf::from("results/peak.jtl"));

        let bare: RunInput = "results/soak-test.jtl".parse().unwrap();
        assert_eq!(bare.name, "soak-test");
        assert_eq!(bare.path, PathBuf::from("results/soak-test.jtl"));
    }

    #[test]
    fn should_reject_incomplete_inputs() {
        assert!("".parse::<RunInput>().is_err());
        assert!("=results.jtl".parse::<RunInput>().is_err());
        assert!("name=".parse::<RunInput>().is_err());
    }

    #[test]
    fn should_report_missing_default_input() {
        let dir = tempfile::tempdir().unwrap();
        let default_input = dir.path().join("results.jtl");

        let discovery = discover(&[], None, &default_input).unwrap();

        assert_eq!(discovery, Discovery::MissingDefault(default_input));
    }

    #[test]
    fn should_use_existing_default_input() {
        let dir = tempfile::tempdir().unwrap();
        let default_input = dir.path().join("results.jtl");
        fs::write(&default_input, "timeStamp,elapsed\n").unwrap();

        let discovery = discover(&[], None, &default_input).unwrap();

        assert_eq!(
            discovery,
            Discovery::Runs(vec![RunInput {
                name: "results".to_owned(),
                path: default_input,
            }])
        );
    }

    #[test]
    fn should_scan_result_logs_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        for file in ["b-spike.JTL", "a-baseline.csv", "notes.txt", "c-soak.jtl"] {
            fs::write(dir.path().join(file), "").unwrap();
        }
        fs::create_dir(dir.path().join("nested.jtl")).unwrap();
        let explicit = RunInput::from_path(Path::new("first.jtl"));

        let Discovery::Runs(runs) =
            discover(&[explicit], Some(dir.path()), Path::new("unused.jtl")).unwrap()
        else {
            panic!("expected runs");
        };

        let names: Vec<&str> = runs.iter().map(|run| run.name.as_str()).collect();
        assert_eq!(names, vec!["first", "a-baseline", "b-spike", "c-soak"]);
    }

    #[test]
    fn should_fail_on_empty_or_missing_scan_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            discover(&[], Some(dir.path()), Path::new("unused.jtl")),
            Err(AnalyzerError::NoResultLogs(_))
        ));
        assert!(matches!(
            discover(&[], Some(&dir.path().join("missing")), Path::new("unused.jtl")),
            Err(AnalyzerError::CannotScanDirectory { .. })
        ));
    }
}
