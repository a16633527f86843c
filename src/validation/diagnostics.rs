//! The `(warnings, errors)` pair every validator returns.

use super::ValidationError;
use serde_json::Value;

/// Signature shared by all field validators: value in, diagnostics out.
pub type ValidateFn = fn(&Value, &str) -> Diagnostics;

/// Outcome of validating one field.
///
/// None of the validators in this crate emit warnings; the list is kept so
/// callers can treat every validator the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub warnings: Vec<String>,
    pub errors: Vec<ValidationError>,
}

impl Diagnostics {
    pub fn ok() -> Self {
        Diagnostics::default()
    }

    pub fn error(err: ValidationError) -> Self {
        Diagnostics {
            warnings: vec![],
            errors: vec![err],
        }
    }

    pub fn from_result(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Diagnostics::ok(),
            Err(e) => Diagnostics::error(e),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// First error, if any.
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.errors.into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Borrow the string inside `value`, or report the type mismatch for `field`.
pub fn expect_string<'a>(value: &'a Value, field: &str) -> Result<&'a str, ValidationError> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(ValidationError::NotAString {
            field: field.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expect_string() {
        assert_eq!(expect_string(&json!("10.0.0.0/8"), "f").unwrap(), "10.0.0.0/8");
        for v in [json!(1), json!(null), json!([]), json!({}), json!(true)] {
            assert_eq!(
                expect_string(&v, "f").unwrap_err(),
                ValidationError::NotAString {
                    field: "f".to_string()
                }
            );
        }
    }

    #[test]
    fn test_result_conversion() {
        assert!(Diagnostics::from_result(Ok(())).is_ok());
        assert_eq!(Diagnostics::ok().into_result(), Ok(()));

        let err = ValidationError::NotAString {
            field: "f".to_string(),
        };
        let diags = Diagnostics::from_result(Err(err.clone()));
        assert!(!diags.is_ok());
        assert!(diags.warnings.is_empty());
        assert_eq!(diags.into_result(), Err(err));
    }
}
