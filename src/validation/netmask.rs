//! Dotted netmask handling.
//!
//! FortiOS accepts `ip mask` as well as `ip/prefix` for most subnet fields;
//! [`normalize_netmask`] turns the first form into the second so the
//! classnet validators only deal with CIDR.

use super::{expect_string, Diagnostics, ValidationError};
use crate::models::mask_prefix_len;
use serde_json::Value;
use std::net::Ipv4Addr;

const ZERO_MASK: &str = "0.0.0.0";

/// Prefix length of a dotted mask, 0 when it is unparsable or not contiguous.
fn netmask_prefix_len(mask: &str) -> u8 {
    mask.parse::<Ipv4Addr>()
        .ok()
        .and_then(mask_prefix_len)
        .unwrap_or(0)
}

/// Rewrite `"ip mask"` as `"ip/prefix"`; anything without a space is returned as is.
pub fn normalize_netmask(value: &str, field: &str) -> Result<String, ValidationError> {
    let Some((ip, mask)) = value.split_once(' ') else {
        return Ok(value.to_string());
    };

    let prefix_len = netmask_prefix_len(mask);
    if mask != ZERO_MASK && prefix_len == 0 {
        return Err(ValidationError::parse(
            field,
            "contain a valid netmask",
            value,
            "invalid netmask",
        ));
    }

    Ok(format!("{ip}/{prefix_len}"))
}

/// Validate a bare dotted netmask such as `255.255.255.0`.
pub fn check_ipv4_netmask(value: &str, field: &str) -> Result<(), ValidationError> {
    if value != ZERO_MASK && netmask_prefix_len(value) == 0 {
        return Err(ValidationError::rejected(
            field,
            "contain a valid IPv4 netmask",
            value,
        ));
    }
    Ok(())
}

pub fn validate_ipv4_netmask(v: &Value, k: &str) -> Diagnostics {
    Diagnostics::from_result(expect_string(v, k).and_then(|s| check_ipv4_netmask(s, k)))
}
