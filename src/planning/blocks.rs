//! Splitting a VLAN subnet into reserved and assignable address blocks.

use crate::address_space::subnet_mask_to_cidr;
use crate::config::ReservedPolicy;
use crate::error::{FormatError, PlanError};
use crate::models::{parse_addr, Ipv4, MAX_LENGTH};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Whether a block may be handed out to hosts.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Reserved,
    Assignable,
}

/// An inclusive run of host addresses.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AddressBlock {
    pub start: Ipv4Addr,
    pub end: Ipv4Addr,
    pub kind: BlockKind,
    pub description: &'static str,
}

impl AddressBlock {
    /// Number of addresses in the block.
    pub fn len(&self) -> u64 {
        (u32::from(self.end) - u32::from(self.start)) as u64 + 1
    }

    pub fn is_reserved(&self) -> bool {
        self.kind == BlockKind::Reserved
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        (self.start..=self.end).contains(&ip)
    }
}

/// Accept a netmask either as `/n` or as a dotted-decimal mask.
pub fn parse_netmask(netmask: &str) -> Result<u8, FormatError> {
    match netmask.strip_prefix('/') {
        Some(len) => {
            let len: u32 = len
                .parse()
                .map_err(|_| FormatError::InvalidMask(netmask.to_string()))?;
            if len > MAX_LENGTH as u32 {
                return Err(FormatError::InvalidCidr(len));
            }
            Ok(len as u8)
        }
        None => subnet_mask_to_cidr(netmask),
    }
}

/// Parse `subnet` and `netmask` into a network, host bits cleared.
pub fn parse_network(subnet: &str, netmask: &str) -> Result<Ipv4, FormatError> {
    let addr = parse_addr(subnet)?;
    let len = parse_netmask(netmask)?;
    Ok(Ipv4::from_parts(addr, len)?.network())
}

/// Smallest host count that leaves at least one assignable address under `policy`.
fn required_hosts(policy: &ReservedPolicy) -> u64 {
    policy.total() + 1
}

fn ensure_capacity(net: &Ipv4, policy: &ReservedPolicy) -> Result<(), PlanError> {
    let needed = required_hosts(policy);
    let available = net.host_count();
    if available < needed {
        log::debug!("{net} has {available} hosts, needs {needed}");
        return Err(PlanError::InsufficientSpace { needed, available });
    }
    Ok(())
}

/// Parse a subnet and split it into reserved-start, assignable and reserved-end blocks.
///
/// Fails with [`PlanError::InsufficientSpace`] when the subnet cannot hold the
/// reserved addresses plus at least one assignable address.
pub fn calculate_subnet_info(
    subnet: &str,
    netmask: &str,
    policy: &ReservedPolicy,
) -> Result<(Ipv4, Vec<AddressBlock>), PlanError> {
    let net = parse_network(subnet, netmask)?;
    let blocks = address_blocks(&net, policy)?;
    Ok((net, blocks))
}

/// Split `net` into its address blocks in ascending order.
pub fn address_blocks(
    net: &Ipv4,
    policy: &ReservedPolicy,
) -> Result<Vec<AddressBlock>, PlanError> {
    ensure_capacity(net, policy)?;

    let hosts = net.host_count();
    let start = policy.start_count as u64;
    let end = policy.end_count as u64;
    // ensure_capacity guarantees every index below is a host
    let host = |i: u64| net.nth_host(i).unwrap_or(net.lo());

    let mut blocks = Vec::with_capacity(3);
    if start > 0 {
        blocks.push(AddressBlock {
            start: host(0),
            end: host(start - 1),
            kind: BlockKind::Reserved,
            description: "Management IPs (Reserved)",
        });
    }
    blocks.push(AddressBlock {
        start: host(start),
        end: host(hosts - end - 1),
        kind: BlockKind::Assignable,
        description: "Assignable IPs",
    });
    if end > 0 {
        blocks.push(AddressBlock {
            start: host(hosts - end),
            end: host(hosts - 1),
            kind: BlockKind::Reserved,
            description: "Management IP (Reserved)",
        });
    }
    Ok(blocks)
}

/// The default gateway of a subnet: its first usable host.
pub fn default_gateway(net: &Ipv4) -> Ipv4Addr {
    net.first_host()
}

/// First and last assignable address of `net`.
pub fn assignable_bounds(
    net: &Ipv4,
    policy: &ReservedPolicy,
) -> Result<(Ipv4Addr, Ipv4Addr), PlanError> {
    let blocks = address_blocks(net, policy)?;
    blocks
        .iter()
        .find(|b| b.kind == BlockKind::Assignable)
        .map(|b| (b.start, b.end))
        .ok_or(PlanError::InsufficientSpace {
            needed: required_hosts(policy),
            available: net.host_count(),
        })
}

/// True if `ip` is a host of `net` outside both reserved blocks.
pub fn is_ip_assignable(ip: Ipv4Addr, net: &Ipv4, policy: &ReservedPolicy) -> bool {
    let Some(index) = net.host_index(ip) else {
        return false;
    };
    let hosts = net.host_count();
    let reserved_start = index < policy.start_count as u64;
    let reserved_end = index >= hosts.saturating_sub(policy.end_count as u64);
    !(reserved_start || reserved_end)
}

/// Check an address before an allocation request is built for it.
pub fn validate_assignment(
    ip: Ipv4Addr,
    net: &Ipv4,
    policy: &ReservedPolicy,
) -> Result<(), PlanError> {
    if !net.contains(ip) {
        return Err(PlanError::AddressNotInSubnet {
            ip,
            network: net.network().to_string(),
        });
    }
    if !is_ip_assignable(ip, net, policy) {
        return Err(PlanError::ReservedAddress(ip));
    }
    Ok(())
}
