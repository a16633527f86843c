//! Reading validation documents from disk.

use super::ValidationDocument;
use std::error::Error;
use std::path::Path;

/// Parse a document from JSON text.
///
/// Errors name the JSON path of the element that failed, e.g.
/// `fields[2].validator: unknown variant ...`.
pub fn parse_document(json: &str) -> Result<ValidationDocument, Box<dyn Error>> {
    let deserializer = &mut serde_json::Deserializer::from_str(json);
    let document: ValidationDocument = serde_path_to_error::deserialize(deserializer)
        .map_err(|e| format!("Error parsing document at {}: {}", e.path(), e.inner()))?;
    Ok(document)
}

/// Read and parse a document file.
pub fn read_document(file: &str) -> Result<ValidationDocument, Box<dyn Error>> {
    if !Path::new(file).exists() {
        return Err(format!("Document file does not exist: {file}").into());
    }
    log::info!("Reading validation document: {file}");
    let json =
        std::fs::read_to_string(file).map_err(|e| format!("Error reading {file}: {e}"))?;
    let document = parse_document(&json)?;
    log::debug!("Document {file} holds {} field(s)", document.fields.len());
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validator;
    use serde_json::json;

    #[test]
    fn test_parse_document() {
        let doc = parse_document(
            r#"{"fields": [
                {"name": "subnet", "validator": "ipv4-classnet", "value": "10.0.0.0/8"},
                {"name": "port", "validator": "ipv4-netmask", "value": 443}
            ]}"#,
        )
        .expect("Error parsing document");
        assert_eq!(doc.fields.len(), 2);
        assert_eq!(doc.fields[0].validator, Validator::Ipv4Classnet);
        assert_eq!(doc.fields[1].value, json!(443));
    }

    #[test]
    fn test_missing_value_is_null() {
        let doc = parse_document(r#"{"fields": [{"name": "ip6", "validator": "ipv6-prefix"}]}"#)
            .expect("Error parsing document");
        assert_eq!(doc.fields[0].value, json!(null));
    }

    #[test]
    fn test_parse_error_names_path() {
        let err = parse_document(
            r#"{"fields": [
                {"name": "a", "validator": "ipv4-classnet", "value": "10.0.0.0/8"},
                {"name": "b", "validator": "ipv4-subnet", "value": "10.0.0.0/8"}
            ]}"#,
        )
        .unwrap_err();
        assert!(
            err.to_string().contains("fields[1].validator"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_read_document() {
        let doc = read_document("src/tests/test_data/fields_valid.json")
            .expect("Error reading document");
        assert_eq!(doc.fields.len(), 8);
        assert!(read_document("src/tests/test_data/does_not_exist.json").is_err());
    }
}
