use serde::{Deserialize, Serialize};

pub const DEFAULT_CHART_WIDTH: u64 = 1600;
pub const DEFAULT_CHART_HEIGHT: u64 = 1200;
pub const DEFAULT_ACCEPTABLE_ERROR_RATE: f64 = 5.0;
pub const DEFAULT_CRITICAL_ERROR_RATE: f64 = 20.0;

/// Rendering settings handed to every chart builder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartStyle {
    pub dark_theme: bool,
    pub width: u64,
    pub height: u64,
    /// Error rate (%) below which a run is considered healthy.
    pub acceptable_error_rate: f64,
    /// Error rate (%) at or above which a run is considered broken.
    pub critical_error_rate: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            dark_theme: true,
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            acceptable_error_rate: DEFAULT_ACCEPTABLE_ERROR_RATE,
            critical_error_rate: DEFAULT_CRITICAL_ERROR_RATE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Acceptable,
    Elevated,
    Critical,
}

impl ErrorSeverity {
    pub const ALL: [ErrorSeverity; 3] = [
        ErrorSeverity::Acceptable,
        ErrorSeverity::Elevated,
        ErrorSeverity::Critical,
    ];

    pub fn color(&self) -> &'static str {
        match self {
            ErrorSeverity::Acceptable => "#2e9e44",
            ErrorSeverity::Elevated => "#f39c12",
            ErrorSeverity::Critical => "#d62728",
        }
    }
}

impl ChartStyle {
    pub fn severity(&self, error_rate: f64) -> ErrorSeverity {
        if error_rate < self.acceptable_error_rate {
            ErrorSeverity::Acceptable
        } else if error_rate < self.critical_error_rate {
            ErrorSeverity::Elevated
        } else {
            ErrorSeverity::Critical
        }
    }

    pub fn severity_label(&self, severity: ErrorSeverity) -> String {
        match severity {
            ErrorSeverity::Acceptable => format!("< {}%", self.acceptable_error_rate),
            ErrorSeverity::Elevated => format!(
                "{}% - {}%",
                self.acceptable_error_rate, self.critical_error_rate
            ),
            ErrorSeverity::Critical => format!(">= {}%", self.critical_error_rate),
        }
    }

    pub fn background_color(&self) -> Option<&'static str> {
        self.dark_theme.then_some("#242424")
    }
}
