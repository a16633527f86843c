//! Address family agnostic network.

use super::{Ipv4, Ipv6Net};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::IpAddr;
use std::str::FromStr;

/// An IPv4 or IPv6 CIDR, address kept as written.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum IpNet {
    V4(Ipv4),
    V6(Ipv6Net),
}

impl IpNet {
    /// Parse either family; anything containing ':' is read as IPv6.
    pub fn new(addr_cidr: &str) -> Result<IpNet, Box<dyn Error>> {
        if addr_cidr.contains(':') {
            Ok(IpNet::V6(Ipv6Net::new(addr_cidr)?))
        } else {
            Ok(IpNet::V4(Ipv4::new(addr_cidr)?))
        }
    }

    /// The address as written.
    pub fn addr(&self) -> IpAddr {
        match self {
            IpNet::V4(net) => IpAddr::V4(net.addr),
            IpNet::V6(net) => IpAddr::V6(net.addr),
        }
    }

    pub fn prefix_len(&self) -> u8 {
        match self {
            IpNet::V4(net) => net.mask,
            IpNet::V6(net) => net.prefix,
        }
    }
}

impl From<Ipv4> for IpNet {
    fn from(net: Ipv4) -> Self {
        IpNet::V4(net)
    }
}

impl From<Ipv6Net> for IpNet {
    fn from(net: Ipv6Net) -> Self {
        IpNet::V6(net)
    }
}

impl FromStr for IpNet {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IpNet::new(s)
    }
}

impl std::fmt::Display for IpNet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            IpNet::V4(net) => write!(f, "{net}"),
            IpNet::V6(net) => write!(f, "{net}"),
        }
    }
}

impl Serialize for IpNet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IpNet {
    fn deserialize<D>(deserializer: D) -> Result<IpNet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IpNet::new(&s).map_err(de::Error::custom)
    }
}
