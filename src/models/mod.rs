//! Domain models for IPv4 address-space planning.
//!
//! This module contains the value types used throughout the crate:
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`NetworkDescriptor`] - everything derived from an address and mask
//! - [`MacAddress`] - 48-bit hardware address
//! - [`VlanId`] - 802.1Q VLAN identifier

mod ipv4;
mod mac;
mod network;
mod vlan;

// Re-export public types
pub use ipv4::{get_cidr_mask, mask_prefix_len, parse_addr, parse_mask, Ipv4, MAX_LENGTH};
pub use mac::MacAddress;
pub use network::NetworkDescriptor;
pub use vlan::VlanId;
