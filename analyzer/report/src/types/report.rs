use super::run_set::RunSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const REPORT_JSON_FILE: &str = "report.json";
pub const REPORT_TEXT_FILE: &str = "report.txt";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Analysis unique identifier
    pub uuid: Uuid,

    /// When the analysis was produced
    pub timestamp: DateTime<Utc>,

    /// Metrics of every analyzed run, in input order
    pub runs: RunSet,
}

impl AnalysisReport {
    pub fn new(uuid: Uuid, timestamp: DateTime<Utc>, runs: RunSet) -> Self {
        Self {
            uuid,
            timestamp,
            runs,
        }
    }

    pub fn dump_to_json(&self, output_dir: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(output_dir)?;

        let report_path = output_dir.join(REPORT_JSON_FILE);
        let report_json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(&report_path, report_json)?;
        Ok(report_path)
    }

    pub fn save_text(&self, output_dir: &Path) -> std::io::Result<(PathBuf, String)> {
        std::fs::create_dir_all(output_dir)?;

        let report_path = output_dir.join(REPORT_TEXT_FILE);
        let text = self.to_text();
        std::fs::write(&report_path, &text)?;
        Ok((report_path, text))
    }
}
