pub mod comparison;
mod plotting;
mod prints;
mod text_report;
mod types;
mod utils;

pub use plotting::chart::{Orientation, Panel, PanelLayout, ReportChart};
pub use plotting::chart_kind::ChartKind;
pub use plotting::charts::create_chart;
pub use plotting::style::{ChartStyle, ErrorSeverity};
pub use text_report::REPORT_WIDTH;
pub use types::*;

/// Tracing target of user-facing console output.
pub const PRINT_TARGET: &str = "loadtest::print";
