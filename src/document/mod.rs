//! Validation documents.
//!
//! A document lists configuration fields, each with the validator that guards
//! it and the value to check:
//!
//! ```json
//! { "fields": [ { "name": "subnet", "validator": "ipv4-classnet", "value": "10.0.0.0/8" } ] }
//! ```

mod load;

use crate::validation::Validator;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use load::{parse_document, read_document};

/// One field to validate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Field name, used in error messages.
    pub name: String,
    /// Validator guarding the field.
    pub validator: Validator,
    /// Raw value as found in the configuration; not necessarily a string.
    #[serde(default)]
    pub value: Value,
}

/// A set of fields read from a JSON document.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ValidationDocument {
    pub fields: Vec<FieldSpec>,
}
