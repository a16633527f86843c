//! Report output for validated documents.

use super::terminal::{format_field, format_value, status_marker};
use crate::processing::{summarize, FieldReport, Summary};
use colored::Colorize;
use itertools::Itertools;

/// Render one report row; errors are joined with `; `.
pub fn format_report_row(report: &FieldReport) -> String {
    format!(
        r#"{index},{status},{name},{validator},{value},{errors}"#,
        index = format_field(report.index, 5),
        status = format_field(if report.passed() { "ok" } else { "error" }, 8),
        name = format_field(&report.name, 32),
        validator = format_field(report.validator, 20),
        value = format_field(format_value(&report.value), 28),
        errors = format_field(report.errors.iter().join("; "), 0),
    )
}

/// Print all rows and a summary line to stdout.
pub fn print_report(reports: &[FieldReport]) -> Summary {
    log::info!("#Start print_report() rows={}", reports.len());
    println!(r#""cnt","status","field","validator","value","errors""#);
    for report in reports {
        println!("{}", format_report_row(report));
    }

    let summary = summarize(reports);
    println!(
        "#{}# {} field(s), {} passed, {} failed",
        status_marker(summary.failed == 0),
        summary.total,
        summary.passed.to_string().green(),
        summary.failed.to_string().red()
    );
    summary
}
