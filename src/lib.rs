//! FortiOS network field validators.
//!
//! Validators for the address fields of FortiOS configuration objects:
//! IPv4 subnets written as `ip/prefix` or `ip mask`, host addresses,
//! netmasks and IPv6 prefixes.
//!
//! ```
//! use fortios_net_validators::validation::Validator;
//! use serde_json::json;
//!
//! let diags = Validator::Ipv4ClassnetHost.validate(&json!("192.168.0.0/24"), "ip");
//! assert!(!diags.is_ok());
//! ```

pub mod config;
pub mod document;
pub mod models;
pub mod output;
pub mod processing;
pub mod validation;

use processing::FieldReport;
use std::error::Error;

/// Read a document file and validate all of its fields.
pub fn validate_file(file: &str) -> Result<Vec<FieldReport>, Box<dyn Error>> {
    let document = document::read_document(file)?;
    Ok(processing::validate_document(&document))
}

// return error if any field failed
pub fn check_reports(reports: &[FieldReport]) -> Result<(), Box<dyn Error>> {
    let summary = processing::summarize(reports);
    if summary.failed > 0 {
        return Err(format!(
            "{} of {} field(s) failed validation",
            summary.failed, summary.total
        )
        .into());
    }
    Ok(())
}
