//! Network and broadcast address arithmetic on dotted-decimal strings.

use super::mask::subnet_mask_to_cidr;
use crate::error::FormatError;
use crate::models::{parse_addr, parse_mask, Ipv4, NetworkDescriptor};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Usable host range of a subnet.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IpRange {
    pub first_usable: String,
    pub last_usable: String,
    /// Addresses in the subnet, network and broadcast included.
    pub total_ips: u64,
    pub usable_ips: u64,
}

/// `ip & mask`, e.g. `192.168.1.100` / `255.255.255.0` gives `192.168.1.0`.
pub fn calculate_network_address(ip: &str, mask: &str) -> Result<String, FormatError> {
    let ip = u32::from(parse_addr(ip)?);
    let mask = parse_mask(mask)?;
    Ok(Ipv4Addr::from(ip & mask).to_string())
}

/// `network | !mask`.
pub fn calculate_broadcast_address(network: &str, mask: &str) -> Result<String, FormatError> {
    let network = u32::from(parse_addr(network)?);
    let mask = parse_mask(mask)?;
    Ok(Ipv4Addr::from(network | !mask).to_string())
}

/// Parse an address and a dotted-decimal mask into an [`Ipv4`].
pub fn parse_subnet(ip: &str, mask: &str) -> Result<Ipv4, FormatError> {
    let addr = parse_addr(ip)?;
    let cidr = subnet_mask_to_cidr(mask)?;
    Ipv4::from_parts(addr, cidr)
}

/// First and last usable address of the subnet containing `network`.
///
/// Host bits of `network` are ignored. `/31` reports both addresses as usable
/// and `/32` its single address.
pub fn generate_ip_range(network: &str, mask: &str) -> Result<IpRange, FormatError> {
    let net = parse_subnet(network, mask)?;
    let range = IpRange {
        first_usable: net.first_host().to_string(),
        last_usable: net.last_host().to_string(),
        total_ips: net.size(),
        usable_ips: net.host_count(),
    };
    log::trace!("generate_ip_range({}) = {:?}", net.network(), range);
    Ok(range)
}

/// True when `ip` masked with `mask` equals `network`. Malformed input gives `false`.
pub fn is_ip_in_subnet(ip: &str, network: &str, mask: &str) -> bool {
    match (calculate_network_address(ip, mask), parse_addr(network)) {
        (Ok(computed), Ok(network)) => computed == network.to_string(),
        _ => false,
    }
}

/// Full [`NetworkDescriptor`] for an address and dotted-decimal mask.
pub fn describe_network(ip: &str, mask: &str) -> Result<NetworkDescriptor, FormatError> {
    parse_subnet(ip, mask).map(NetworkDescriptor::from)
}
