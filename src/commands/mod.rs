//! Command implementations

pub mod analyze;
pub mod report;

pub use analyze::{AnalysisResult, analyze_word};
pub use report::{ReportConfig, ReportResult, build_report, run_report};
