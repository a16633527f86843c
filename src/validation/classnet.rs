//! IPv4 "classnet" validators.
//!
//! A classnet value is a subnet written either as `ip/prefix` or `ip mask`.
//! The three validators differ in which address inside the subnet they accept:
//!
//! - [`validate_ipv4_classnet_any`] - the network base, at any prefix length
//! - [`validate_ipv4_classnet_host`] - a host address (not base, not broadcast)
//! - [`validate_ipv4_classnet`] - the network base, except at /0 and /32

use super::broadcast::is_broadcast_address;
use super::netmask::normalize_netmask;
use super::{expect_string, Diagnostics, ValidationError};
use crate::models::{IpNet, Ipv4};
use serde_json::Value;
use std::net::{IpAddr, Ipv4Addr};

/// Normalize `ip mask` input and parse it as an IPv4 CIDR.
fn parse_ipv4_classnet(value: &str, field: &str) -> Result<Ipv4, ValidationError> {
    let cidr = normalize_netmask(value, field)?;
    Ipv4::new(&cidr)
        .map_err(|e| ValidationError::parse(field, "contain a valid IPv4 value", value, e))
}

/// Multicast, loopback and the limited broadcast are never valid subnet addresses.
fn check_reserved(net: &Ipv4, value: &str, field: &str) -> Result<(), ValidationError> {
    if net.addr.is_multicast() {
        return Err(ValidationError::rejected(
            field,
            "not be a multicast address",
            value,
        ));
    }
    if net.addr.is_loopback() {
        return Err(ValidationError::rejected(
            field,
            "not be a loopback address",
            value,
        ));
    }
    if net.addr == Ipv4Addr::BROADCAST {
        return Err(ValidationError::rejected(
            field,
            "not be a broadcast address",
            value,
        ));
    }
    Ok(())
}

pub fn check_ipv4_classnet_any(value: &str, field: &str) -> Result<(), ValidationError> {
    let net = parse_ipv4_classnet(value, field)?;
    if !net.is_network_base() {
        return Err(ValidationError::rejected(
            field,
            "contain a valid IPv4 network address",
            value,
        ));
    }
    Ok(())
}

pub fn check_ipv4_classnet_host(value: &str, field: &str) -> Result<(), ValidationError> {
    let net = parse_ipv4_classnet(value, field)?;
    // /31 and /32 have no separate network address, /0 is "any"
    let net_exception = matches!(net.mask, 0 | 31 | 32);

    check_reserved(&net, value, field)?;
    if is_broadcast_address(IpAddr::V4(net.addr), &IpNet::V4(net)) {
        return Err(ValidationError::rejected(
            field,
            "not be a broadcast address",
            value,
        ));
    }
    if net.is_network_base() && !net_exception {
        return Err(ValidationError::rejected(
            field,
            "contain a valid IPv4 host address",
            value,
        ));
    }
    Ok(())
}

pub fn check_ipv4_classnet(value: &str, field: &str) -> Result<(), ValidationError> {
    let net = parse_ipv4_classnet(value, field)?;
    let net_exception = matches!(net.mask, 0 | 32);

    check_reserved(&net, value, field)?;
    if !net.is_network_base() && !net_exception {
        return Err(ValidationError::rejected(
            field,
            "contain a valid IPv4 network address",
            value,
        ));
    }
    Ok(())
}

pub fn validate_ipv4_classnet_any(v: &Value, k: &str) -> Diagnostics {
    Diagnostics::from_result(expect_string(v, k).and_then(|s| check_ipv4_classnet_any(s, k)))
}

pub fn validate_ipv4_classnet_host(v: &Value, k: &str) -> Diagnostics {
    Diagnostics::from_result(expect_string(v, k).and_then(|s| check_ipv4_classnet_host(s, k)))
}

pub fn validate_ipv4_classnet(v: &Value, k: &str) -> Diagnostics {
    Diagnostics::from_result(expect_string(v, k).and_then(|s| check_ipv4_classnet(s, k)))
}
