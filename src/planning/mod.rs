//! VLAN subnet planning built on the address-space functions.
//!
//! - [`blocks`] - reserved/assignable block layout and assignability checks
//! - [`vlan`] - full VLAN configuration validation
//! - [`availability`] - allocation statistics and next free address

mod availability;
mod blocks;
mod vlan;

pub use availability::{ip_availability, next_available_ip, IpAvailability};
pub use blocks::{
    address_blocks, assignable_bounds, calculate_subnet_info, default_gateway, is_ip_assignable,
    parse_netmask, parse_network, validate_assignment, AddressBlock, BlockKind,
};
pub use vlan::{validate_vlan_configuration, VlanPlan};
