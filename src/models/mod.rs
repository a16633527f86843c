//! Address models used by the validators.
//!
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`Ipv6Net`] - IPv6 address with prefix length
//! - [`IpNet`] - either of the above

mod ipv4;
mod ipv6;
mod net;

// Re-export public types
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, mask_prefix_len, Ipv4, MAX_LENGTH,
};
pub use ipv6::{get_prefix_mask, Ipv6Net, MAX_LENGTH_V6};
pub use net::IpNet;
