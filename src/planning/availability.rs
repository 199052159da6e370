//! Allocation statistics and next-free-address lookup for a VLAN subnet.

use super::blocks::is_ip_assignable;
use crate::address_space::{
    get_utilization_color, reserved_count, utilization_percentage, StatusBand,
};
use crate::config::ReservedPolicy;
use crate::models::Ipv4;
use serde::Serialize;
use std::collections::HashSet;
use std::net::Ipv4Addr;

/// IP availability figures for one subnet.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct IpAvailability {
    /// Usable host addresses, network and broadcast excluded.
    pub total_ips: u64,
    pub assigned_ips: u64,
    pub available_ips: u64,
    pub reserved_ips: u64,
    /// Assigned share of the assignable addresses, two decimals.
    pub utilization_percentage: f64,
    pub status: StatusBand,
}

/// Availability of `net` given how many addresses are currently assigned.
pub fn ip_availability(
    net: &Ipv4,
    assigned_count: u64,
    policy: &ReservedPolicy,
) -> IpAvailability {
    let total_ips = net.host_count();
    let reserved_ips = reserved_count(net, policy);
    let assignable_total = total_ips - reserved_ips;
    if assigned_count > assignable_total {
        log::warn!(
            "{net} reports {assigned_count} assignments for {assignable_total} assignable addresses"
        );
    }
    let utilization = utilization_percentage(assigned_count, assignable_total);

    IpAvailability {
        total_ips,
        assigned_ips: assigned_count,
        available_ips: assignable_total.saturating_sub(assigned_count),
        reserved_ips,
        utilization_percentage: utilization,
        status: get_utilization_color(utilization),
    }
}

/// Lowest assignable address of `net` not already in `assigned`.
pub fn next_available_ip(
    net: &Ipv4,
    assigned: &[Ipv4Addr],
    policy: &ReservedPolicy,
) -> Option<Ipv4Addr> {
    let taken: HashSet<Ipv4Addr> = assigned.iter().copied().collect();
    let next = net
        .hosts()
        .skip(policy.start_count as usize)
        .find(|ip| !taken.contains(ip) && is_ip_assignable(*ip, net, policy));
    if next.is_none() {
        log::debug!("No free address left in {net}");
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(s: &str) -> Ipv4 {
        Ipv4::new(s).unwrap()
    }

    #[test]
    fn test_ip_availability_empty() {
        let a = ip_availability(&net("192.168.1.0/24"), 0, &ReservedPolicy::default());
        assert_eq!(a.total_ips, 254);
        assert_eq!(a.reserved_ips, 7);
        assert_eq!(a.available_ips, 247);
        assert_eq!(a.utilization_percentage, 0.0);
        assert_eq!(a.status, StatusBand::Healthy);
    }

    #[test]
    fn test_ip_availability_bands() {
        let policy = ReservedPolicy::default();
        let n = net("192.168.1.0/24");
        // 247 assignable addresses
        assert_eq!(ip_availability(&n, 124, &policy).status, StatusBand::Moderate);
        assert_eq!(ip_availability(&n, 186, &policy).status, StatusBand::Warning);
        let full = ip_availability(&n, 247, &policy);
        assert_eq!(full.utilization_percentage, 100.0);
        assert_eq!(full.available_ips, 0);
        assert_eq!(full.status, StatusBand::Critical);
    }

    #[test]
    fn test_ip_availability_tiny_subnet() {
        let a = ip_availability(&net("10.0.0.0/30"), 0, &ReservedPolicy::default());
        assert_eq!(a.total_ips, 2);
        assert_eq!(a.reserved_ips, 2);
        assert_eq!(a.available_ips, 0);
        assert_eq!(a.utilization_percentage, 0.0);
    }

    #[test]
    fn test_ip_availability_policy_larger_than_subnet() {
        let policy = ReservedPolicy::new(u32::MAX, u32::MAX);
        let a = ip_availability(&net("10.0.0.0/8"), 0, &policy);
        assert_eq!(a.total_ips, 16777214);
        assert_eq!(a.reserved_ips, 16777214);
        assert_eq!(a.available_ips, 0);
    }

    #[test]
    fn test_next_available_ip() {
        let n = net("192.168.1.0/24");
        let policy = ReservedPolicy::default();
        assert_eq!(
            next_available_ip(&n, &[], &policy),
            Some(Ipv4Addr::new(192, 168, 1, 7))
        );
        let assigned = [
            Ipv4Addr::new(192, 168, 1, 7),
            Ipv4Addr::new(192, 168, 1, 8),
            Ipv4Addr::new(192, 168, 1, 10),
        ];
        assert_eq!(
            next_available_ip(&n, &assigned, &policy),
            Some(Ipv4Addr::new(192, 168, 1, 9))
        );
    }

    #[test]
    fn test_next_available_ip_exhausted() {
        let n = net("192.168.1.0/28");
        let policy = ReservedPolicy::default();
        let assigned: Vec<Ipv4Addr> = (7..=13).map(|i| Ipv4Addr::new(192, 168, 1, i)).collect();
        assert_eq!(next_available_ip(&n, &assigned, &policy), None);
    }
}
