//! IPv4 address-space calculation and validation.
//!
//! Every function here is pure and works on the plain strings and integers
//! the form and request layers deal in:
//! - [`mask`] - CIDR prefix length <-> dotted-decimal mask
//! - [`network`] - network/broadcast addresses and usable ranges
//! - [`reserved`] - infrastructure-reserved addresses
//! - [`validate`] - IP, MAC and VLAN field checks
//! - [`utilization`] - utilization status bands
//!
//! Conversions and arithmetic return `Result<_, FormatError>`; the
//! predicates and formatters never fail.

mod mask;
mod network;
mod reserved;
mod utilization;
mod validate;

pub use mask::{cidr_to_subnet_mask, subnet_mask_to_cidr};
pub use network::{
    calculate_broadcast_address, calculate_network_address, describe_network, generate_ip_range,
    is_ip_in_subnet, parse_subnet, IpRange,
};
pub use reserved::{
    generate_reserved_ips, generate_reserved_ips_with, reserved_count, reserved_hosts,
};
pub use utilization::{
    get_utilization_color, utilization_percentage, StatusBand, CRITICAL_THRESHOLD,
    MODERATE_THRESHOLD, WARNING_THRESHOLD,
};
pub use validate::{format_mac_address, is_valid_ip_address, is_valid_mac_address, is_valid_vlan_id};
