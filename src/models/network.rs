//! Derived description of a subnet.

use super::Ipv4;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything that can be derived from an address and its mask.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkDescriptor {
    /// Lowest address, host bits cleared.
    pub network_address: Ipv4Addr,
    /// Highest address, host bits set.
    pub broadcast_address: Ipv4Addr,
    pub first_usable_address: Ipv4Addr,
    pub last_usable_address: Ipv4Addr,
    /// Addresses in the subnet, network and broadcast included.
    pub total_addresses: u64,
    pub usable_addresses: u64,
    pub prefix_len: u8,
    pub netmask: Ipv4Addr,
}

impl From<Ipv4> for NetworkDescriptor {
    fn from(net: Ipv4) -> Self {
        NetworkDescriptor {
            network_address: net.lo(),
            broadcast_address: net.hi(),
            first_usable_address: net.first_host(),
            last_usable_address: net.last_host(),
            total_addresses: net.size(),
            usable_addresses: net.host_count(),
            prefix_len: net.prefix_len(),
            netmask: net.netmask(),
        }
    }
}
