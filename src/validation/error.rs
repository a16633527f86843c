//! Field-level validation errors.

use thiserror::Error;

/// A single rejected field value.
///
/// The rendered messages follow the provider's wording so that they read the
/// same as the rest of the schema errors a user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expected type of {field} to be string")]
    NotAString { field: String },

    #[error("expected {field} to {condition}, got {value}: {reason}")]
    Parse {
        field: String,
        condition: &'static str,
        value: String,
        reason: String,
    },

    #[error("expected {field} to {condition}, got {value}")]
    Rejected {
        field: String,
        condition: &'static str,
        value: String,
    },
}

impl ValidationError {
    pub(crate) fn parse(
        field: &str,
        condition: &'static str,
        value: &str,
        reason: impl ToString,
    ) -> Self {
        ValidationError::Parse {
            field: field.to_string(),
            condition,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn rejected(field: &str, condition: &'static str, value: &str) -> Self {
        log::debug!("{field}: rejected {value:?}, expected to {condition}");
        ValidationError::Rejected {
            field: field.to_string(),
            condition,
            value: value.to_string(),
        }
    }

    /// Name of the field the error belongs to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::NotAString { field }
            | ValidationError::Parse { field, .. }
            | ValidationError::Rejected { field, .. } => field,
        }
    }
}
