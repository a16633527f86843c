//! IPv6 network and prefix validators.

use super::{expect_string, Diagnostics, ValidationError};
use crate::models::Ipv6Net;
use serde_json::Value;

/// The value must be an IPv6 network base, e.g. `2001:db8::/32`.
///
/// /0 and /128 accept any address.
pub fn check_ipv6_network(value: &str, field: &str) -> Result<(), ValidationError> {
    let net = Ipv6Net::new(value)
        .map_err(|e| ValidationError::parse(field, "contain a valid IPv6 network", value, e))?;
    if !net.is_network_base() && !matches!(net.prefix, 0 | 128) {
        return Err(ValidationError::rejected(
            field,
            "contain a valid IPv6 network address",
            value,
        ));
    }
    Ok(())
}

/// The value must be a syntactically valid IPv6 prefix; host bits are allowed.
pub fn check_ipv6_prefix(value: &str, field: &str) -> Result<(), ValidationError> {
    Ipv6Net::new(value)
        .map(|_| ())
        .map_err(|e| ValidationError::parse(field, "contain a valid IPv6 prefix", value, e))
}

pub fn validate_ipv6_network(v: &Value, k: &str) -> Diagnostics {
    Diagnostics::from_result(expect_string(v, k).and_then(|s| check_ipv6_network(s, k)))
}

pub fn validate_ipv6_prefix(v: &Value, k: &str) -> Diagnostics {
    Diagnostics::from_result(expect_string(v, k).and_then(|s| check_ipv6_prefix(s, k)))
}
