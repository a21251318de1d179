pub mod chart;
pub mod chart_kind;
pub mod charts;
pub mod style;
mod text;
