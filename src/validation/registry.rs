//! Validators addressable by name.
//!
//! Schemas and documents refer to validators with their kebab-case name
//! (`ipv4-classnet-host`, ...). [`Validator`] maps those names to the
//! functions.

use super::classnet::{
    validate_ipv4_classnet, validate_ipv4_classnet_any, validate_ipv4_classnet_host,
};
use super::ipv6::{validate_ipv6_network, validate_ipv6_prefix};
use super::netmask::validate_ipv4_netmask;
use super::{Diagnostics, ValidateFn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Validator {
    Ipv4ClassnetAny,
    Ipv4ClassnetHost,
    Ipv4Classnet,
    Ipv4Netmask,
    Ipv6Network,
    Ipv6Prefix,
}

impl Validator {
    pub const ALL: [Validator; 6] = [
        Validator::Ipv4ClassnetAny,
        Validator::Ipv4ClassnetHost,
        Validator::Ipv4Classnet,
        Validator::Ipv4Netmask,
        Validator::Ipv6Network,
        Validator::Ipv6Prefix,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Validator::Ipv4ClassnetAny => "ipv4-classnet-any",
            Validator::Ipv4ClassnetHost => "ipv4-classnet-host",
            Validator::Ipv4Classnet => "ipv4-classnet",
            Validator::Ipv4Netmask => "ipv4-netmask",
            Validator::Ipv6Network => "ipv6-network",
            Validator::Ipv6Prefix => "ipv6-prefix",
        }
    }

    pub fn func(self) -> ValidateFn {
        match self {
            Validator::Ipv4ClassnetAny => validate_ipv4_classnet_any,
            Validator::Ipv4ClassnetHost => validate_ipv4_classnet_host,
            Validator::Ipv4Classnet => validate_ipv4_classnet,
            Validator::Ipv4Netmask => validate_ipv4_netmask,
            Validator::Ipv6Network => validate_ipv6_network,
            Validator::Ipv6Prefix => validate_ipv6_prefix,
        }
    }

    pub fn validate(self, value: &Value, field: &str) -> Diagnostics {
        (self.func())(value, field)
    }
}

impl FromStr for Validator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Validator::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| format!("unknown validator: {s}"))
    }
}

impl std::fmt::Display for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
