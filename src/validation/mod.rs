//! FortiOS address field validators.
//!
//! Every validator exists in two shapes:
//! - `check_*(value: &str, field: &str) -> Result<(), ValidationError>` for Rust callers
//! - `validate_*(value: &Value, field: &str) -> Diagnostics`, the schema contract,
//!   which also rejects non-string values
//!
//! [`Validator`] looks them up by name.

mod broadcast;
mod classnet;
mod diagnostics;
mod error;
mod ipv6;
mod netmask;
mod registry;

// Re-export public functions
pub use broadcast::{is_broadcast_address, is_broadcast_cidr};
pub use classnet::{
    check_ipv4_classnet, check_ipv4_classnet_any, check_ipv4_classnet_host,
    validate_ipv4_classnet, validate_ipv4_classnet_any, validate_ipv4_classnet_host,
};
pub use diagnostics::{expect_string, Diagnostics, ValidateFn};
pub use error::ValidationError;
pub use ipv6::{check_ipv6_network, check_ipv6_prefix, validate_ipv6_network, validate_ipv6_prefix};
pub use netmask::{check_ipv4_netmask, normalize_netmask, validate_ipv4_netmask};
pub use registry::Validator;
