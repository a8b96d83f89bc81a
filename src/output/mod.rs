//! Report building and writers.
//!
//! This module handles rendering analysis results:
//! - Text report on stdout
//! - JSON report on disk

pub mod json;
pub mod report;
pub mod text;

// Re-export main types and functions
pub use json::{read_json_report, write_json_report};
pub use report::{Report, ReportEntry, ReportSection};
pub use text::write_text_report;
