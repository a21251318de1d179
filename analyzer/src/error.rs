use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A result log that cannot be turned into records at all.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot read result log {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Result log {path} is empty, no header row found")]
    Empty { path: PathBuf },
    #[error("Result log {path} is not a valid table: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Cannot load configuration: {0}")]
    CannotLoadConfiguration(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Cannot scan directory {path}: {source}")]
    CannotScanDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("No result logs found in {0}")]
    NoResultLogs(PathBuf),
    #[error("Cannot create output directory {path}: {source}")]
    CannotCreateOutputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Cannot write {artifact}: {reason}")]
    CannotWriteArtifact { artifact: String, reason: String },
    #[error("Failed to generate {0} artifact(s)")]
    ArtifactsFailed(usize),
    #[error("Logging initialization failure: {0}")]
    LoggingInitFailure(String),
}
