//! Running a document through its validators.

use crate::document::{FieldSpec, ValidationDocument};
use crate::validation::{Diagnostics, Validator};
use serde::Serialize;
use serde_json::Value;

/// Result for one field of a document.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FieldReport {
    /// Position of the field in the document, starting at 1.
    pub index: usize,
    pub name: String,
    pub validator: Validator,
    pub value: Value,
    pub warnings: Vec<String>,
    /// Rendered error messages.
    pub errors: Vec<String>,
}

impl FieldReport {
    fn new(index: usize, field: &FieldSpec, diagnostics: Diagnostics) -> Self {
        FieldReport {
            index,
            name: field.name.clone(),
            validator: field.validator,
            value: field.value.clone(),
            warnings: diagnostics.warnings,
            errors: diagnostics.errors.iter().map(|e| e.to_string()).collect(),
        }
    }

    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Totals over a set of reports.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

/// Validate every field of `document`, in document order.
pub fn validate_document(document: &ValidationDocument) -> Vec<FieldReport> {
    log::info!(
        "#Start validate_document() fields={}",
        document.fields.len()
    );
    let reports: Vec<FieldReport> = document
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let diagnostics = field.validator.validate(&field.value, &field.name);
            if !diagnostics.is_ok() {
                log::warn!(
                    "Field {} failed {}: {} error(s)",
                    field.name,
                    field.validator,
                    diagnostics.errors.len()
                );
            }
            FieldReport::new(i + 1, field, diagnostics)
        })
        .collect();

    let summary = summarize(&reports);
    log::info!(
        "# Validated {} field(s): {} passed, {} failed",
        summary.total,
        summary.passed,
        summary.failed
    );
    reports
}

pub fn summarize(reports: &[FieldReport]) -> Summary {
    let passed = reports.iter().filter(|r| r.passed()).count();
    Summary {
        total: reports.len(),
        passed,
        failed: reports.len() - passed,
    }
}
