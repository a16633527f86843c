//! IPv6 prefix utilities.

use super::ipv4::parse_prefix_len;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::Ipv6Addr;
use std::str::FromStr;

/// Maximum length for an IPv6 prefix (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// Convert an IPv6 prefix length to a mask as u128.
pub fn get_prefix_mask(len: u8) -> Result<u128, Box<dyn Error>> {
    match len {
        0 => Ok(0),
        1..=MAX_LENGTH_V6 => Ok(u128::MAX << (MAX_LENGTH_V6 - len)),
        _ => Err("Prefix length is too long".into()),
    }
}

/// IPv6 address written with a prefix length, host bits included.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv6Net {
    pub addr: Ipv6Addr,
    pub prefix: u8,
}

impl Ipv6Net {
    /// Create a new [`Ipv6Net`] from a CIDR string (e.g., "fe80::/10").
    pub fn new(addr_cidr: &str) -> Result<Ipv6Net, Box<dyn Error>> {
        let (addr, prefix) = addr_cidr
            .split_once('/')
            .ok_or_else(|| format!("invalid CIDR address: {addr_cidr}"))?;
        let addr: Ipv6Addr = addr
            .parse()
            .map_err(|_| format!("invalid CIDR address: {addr_cidr}"))?;
        let prefix = parse_prefix_len(prefix, MAX_LENGTH_V6)
            .ok_or_else(|| format!("invalid CIDR address: {addr_cidr}"))?;
        Ok(Ipv6Net { addr, prefix })
    }

    /// The network base of the prefix.
    pub fn network(&self) -> Ipv6Addr {
        let mask = get_prefix_mask(self.prefix).unwrap_or(u128::MAX);
        Ipv6Addr::from(u128::from(self.addr) & mask)
    }

    pub fn is_network_base(&self) -> bool {
        self.addr == self.network()
    }
}

impl FromStr for Ipv6Net {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv6Net::new(s)
    }
}

impl std::fmt::Display for Ipv6Net {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Ipv6Net {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ipv6Net {
    fn deserialize<D>(deserializer: D) -> Result<Ipv6Net, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv6Net::new(&s).map_err(de::Error::custom)
    }
}
