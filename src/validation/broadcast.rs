//! IPv4 broadcast address detection.

use crate::models::{broadcast_addr, IpNet};
use std::error::Error;
use std::net::{IpAddr, Ipv4Addr};

/// Whether `ip` is the broadcast address of `network`.
///
/// Only IPv4 has broadcast addresses. `255.255.255.255` always counts;
/// /31 and /32 networks have none of their own.
pub fn is_broadcast_address(ip: IpAddr, network: &IpNet) -> bool {
    let (IpAddr::V4(ip), IpNet::V4(net)) = (ip, network) else {
        return false;
    };
    if ip == Ipv4Addr::BROADCAST {
        return true;
    }
    if net.mask >= 31 {
        return false;
    }
    match broadcast_addr(net.addr, net.mask) {
        Ok(last_ip) => last_ip == ip,
        Err(_) => false,
    }
}

/// Parse `ip/prefix` and ask whether the address is its own network's broadcast.
pub fn is_broadcast_cidr(value: &str) -> Result<bool, Box<dyn Error>> {
    let net = IpNet::new(value)?;
    Ok(is_broadcast_address(net.addr(), &net))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_broadcast_cidr() {
        assert!(is_broadcast_cidr("192.168.0.255/24").unwrap());
        assert!(!is_broadcast_cidr("192.168.0.0/24").unwrap());
        assert!(!is_broadcast_cidr("10.10.20.80/29").unwrap());
        assert!(is_broadcast_cidr("10.10.20.79/29").unwrap());
        assert!(is_broadcast_cidr("10.255.255.255/8").unwrap());
        assert!(is_broadcast_cidr("255.255.255.255/0").unwrap());
        assert!(!is_broadcast_cidr("10.0.0.0/0").unwrap());
        assert!(is_broadcast_cidr("10.0.0.0/8 extra").is_err());
    }

    #[test]
    fn test_point_to_point_has_no_broadcast() {
        assert!(!is_broadcast_cidr("172.16.16.5/31").unwrap());
        assert!(!is_broadcast_cidr("172.16.16.5/32").unwrap());
        assert!(is_broadcast_cidr("255.255.255.255/32").unwrap());
    }

    #[test]
    fn test_ipv6_is_never_broadcast() {
        assert!(!is_broadcast_cidr("fe80::ffff/112").unwrap());

        let v4 = IpNet::new("192.168.0.0/24").unwrap();
        let ip: IpAddr = "::ffff:192.168.0.255".parse().unwrap();
        assert!(!is_broadcast_address(ip, &v4));

        let v6 = IpNet::new("fe80::/10").unwrap();
        assert!(!is_broadcast_address(IpAddr::V4(Ipv4Addr::BROADCAST), &v6));
    }

    #[test]
    fn test_address_outside_network() {
        let net = IpNet::new("192.168.0.0/24").unwrap();
        let ip = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 255));
        assert!(!is_broadcast_address(ip, &net));
        let ip = IpAddr::V4(Ipv4Addr::new(192, 168, 0, 255));
        assert!(is_broadcast_address(ip, &net));
    }
}
