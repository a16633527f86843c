//! Terminal output utilities.

use colored::{ColoredString, Colorize};
use serde_json::Value;

/// Quote a value CSV style and right-align it in `width` columns.
///
/// Embedded double quotes are doubled so spreadsheet tools read the row back
/// correctly.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let escaped = value.to_string().replace('"', "\"\"");
    let quoted = format!("\"{escaped}\"");
    format!("{quoted:>width$}")
}

/// Show a raw field value the way a user typed it: strings without JSON quotes.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn status_marker(passed: bool) -> ColoredString {
    if passed {
        "PASS".green()
    } else {
        "FAIL".on_red()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("subnet", 10), "  \"subnet\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("10.0.0.0/8", 5), "\"10.0.0.0/8\"");
    }

    #[test]
    fn test_format_field_escapes_quotes() {
        assert_eq!(format_field(r#"a "b""#, 0), r#""a ""b""""#);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!("10.0.0.0/8")), "10.0.0.0/8");
        assert_eq!(format_value(&json!(24)), "24");
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!(["a"])), r#"["a"]"#);
    }

    #[test]
    fn test_status_marker_text() {
        colored::control::set_override(false);
        assert_eq!(status_marker(true).to_string(), "PASS");
        assert_eq!(status_marker(false).to_string(), "FAIL");
    }
}
