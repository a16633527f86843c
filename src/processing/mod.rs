//! Document processing.
//!
//! - [`validate`] - runs each field through its validator and collects reports

mod validate;

// Re-export public functions
pub use validate::{summarize, validate_document, FieldReport, Summary};
