//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] for an address written together with its prefix length,
//! plus the bit arithmetic the validators need (masks, network base,
//! broadcast address and netmask to prefix conversion).

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use fortios_net_validators::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network (base) address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Prefix length of a dotted netmask.
///
/// Returns `None` when the one bits are not contiguous from the left
/// (e.g. `255.255.0.255`).
pub fn mask_prefix_len(mask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from(mask);
    let ones = bits.leading_ones();
    if ones + bits.trailing_zeros() >= MAX_LENGTH as u32 {
        Some(ones as u8)
    } else {
        None
    }
}

/// IPv4 address with CIDR notation support.
///
/// The address is kept as written, host bits included.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// Surrounding whitespace is not accepted.
    pub fn new(addr_cidr: &str) -> Result<Ipv4, Box<dyn Error>> {
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| format!("invalid CIDR address: {addr_cidr}"))?;
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| format!("invalid CIDR address: {addr_cidr}"))?;
        let mask = parse_prefix_len(mask, MAX_LENGTH)
            .ok_or_else(|| format!("invalid CIDR address: {addr_cidr}"))?;
        Ok(Ipv4 { addr, mask })
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        // mask is always <= MAX_LENGTH once constructed through new()
        cut_addr(self.addr, self.mask).unwrap_or(self.addr)
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask).unwrap_or(self.addr)
    }

    /// True when the written address has no host bits set.
    pub fn is_network_base(&self) -> bool {
        self.addr == self.lo()
    }
}

impl FromStr for Ipv4 {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

/// Parse a decimal prefix length no larger than `max`.
///
/// Signs and empty strings are rejected, unlike `u8::from_str`.
pub(crate) fn parse_prefix_len(s: &str, max: u8) -> Option<u8> {
    if s.is_empty() || s.len() > 3 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u8>().ok().filter(|len| *len <= max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(31).unwrap(), 0xFFFFFFFE);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 0).unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), Ipv4Addr::new(192, 168, 1, 42));
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(10, 10, 20, 80);
        assert_eq!(
            broadcast_addr(ip, 29).unwrap(),
            Ipv4Addr::new(10, 10, 20, 87)
        );
        assert_eq!(
            broadcast_addr(Ipv4Addr::new(10, 10, 20, 79), 29).unwrap(),
            Ipv4Addr::new(10, 10, 20, 79)
        );
        assert_eq!(
            broadcast_addr(ip, 0).unwrap(),
            Ipv4Addr::new(255, 255, 255, 255)
        );
        assert_eq!(broadcast_addr(ip, 32).unwrap(), ip);
    }

    #[test]
    fn test_mask_prefix_len() {
        assert_eq!(mask_prefix_len(Ipv4Addr::new(255, 255, 255, 0)), Some(24));
        assert_eq!(mask_prefix_len(Ipv4Addr::new(255, 255, 255, 255)), Some(32));
        assert_eq!(mask_prefix_len(Ipv4Addr::new(255, 255, 255, 254)), Some(31));
        assert_eq!(mask_prefix_len(Ipv4Addr::new(128, 0, 0, 0)), Some(1));
        assert_eq!(mask_prefix_len(Ipv4Addr::new(0, 0, 0, 0)), Some(0));
        assert_eq!(mask_prefix_len(Ipv4Addr::new(255, 255, 0, 255)), None);
        assert_eq!(mask_prefix_len(Ipv4Addr::new(0, 255, 255, 255)), None);
    }

    #[test]
    fn test_ipv4_new() {
        let ip = Ipv4::new("10.1.1.7/28").unwrap();
        assert_eq!(ip.addr, Ipv4Addr::new(10, 1, 1, 7));
        assert_eq!(ip.mask, 28);
        assert_eq!(ip.lo(), Ipv4Addr::new(10, 1, 1, 0));
        assert_eq!(ip.hi(), Ipv4Addr::new(10, 1, 1, 15));
        assert!(!ip.is_network_base());
        assert!(Ipv4::new("10.1.1.0/28").unwrap().is_network_base());

        for bad in [
            "10.1.1.0",
            "10.1.1.0/33",
            "10.1.1.0/",
            "10.1.1.0/+8",
            " 10.1.1.0/8",
            "10.1.1/8",
            "fe80::/10",
        ] {
            let err = Ipv4::new(bad).unwrap_err();
            assert_eq!(err.to_string(), format!("invalid CIDR address: {bad}"));
        }
    }

    #[test]
    fn test_ipv4_serde() {
        let ip: Ipv4 = serde_json::from_str(r#""192.168.0.1/24""#).unwrap();
        assert_eq!(ip, Ipv4::new("192.168.0.1/24").unwrap());
        assert_eq!(serde_json::to_string(&ip).unwrap(), r#""192.168.0.1/24""#);
        assert!(serde_json::from_str::<Ipv4>(r#""192.168.0.1""#).is_err());
    }
}
