//! Output formatting for validation results.
//!
//! - [`report`] - rows and summary for a validated document
//! - [`terminal`] - field formatting and colored markers

mod report;
mod terminal;

pub use report::{format_report_row, print_report};
pub use terminal::{format_field, format_value, status_marker};
