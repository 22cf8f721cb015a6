//! Report output
//!
//! Plain-text report files plus colored terminal summaries.

pub mod display;
pub mod formatters;
pub mod writer;

pub use display::{print_analysis_result, print_debug, print_report_summary};
pub use writer::{ReportPaths, write_reports};
