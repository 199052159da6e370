//! Complete VLAN configuration check, producing the values a VLAN record is created with.

use super::blocks::{
    address_blocks, assignable_bounds, default_gateway, parse_network, AddressBlock,
};
use crate::config::Settings;
use crate::error::PlanError;
use crate::models::{Ipv4, VlanId};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Calculated network parameters for one VLAN.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VlanPlan {
    pub vlan_id: VlanId,
    /// Network in CIDR notation.
    pub network: Ipv4,
    pub subnet: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub default_gateway: Ipv4Addr,
    pub net_start: Ipv4Addr,
    pub net_end: Ipv4Addr,
    /// Usable host addresses, network and broadcast excluded.
    pub total_ips: u64,
    pub assignable_ips: u64,
    pub reserved_ranges: Vec<AddressBlock>,
}

/// Validate a VLAN ID and subnet together and derive the VLAN's network parameters.
///
/// `netmask` may be `/n` or dotted-decimal. The VLAN ID must be valid for
/// 802.1Q and lie within the configured `min_vlan_id..=max_vlan_id` window.
pub fn validate_vlan_configuration(
    vlan_id: i64,
    subnet: &str,
    netmask: &str,
    settings: &Settings,
) -> Result<VlanPlan, PlanError> {
    let vlan_id = VlanId::within(vlan_id, settings.min_vlan_id, settings.max_vlan_id)?;
    let network = parse_network(subnet, netmask)?;
    let policy = &settings.reserved;

    let blocks = address_blocks(&network, policy)?;
    let (net_start, net_end) = assignable_bounds(&network, policy)?;

    let assignable_ips: u64 = blocks
        .iter()
        .filter(|b| !b.is_reserved())
        .map(AddressBlock::len)
        .sum();
    let reserved_ranges: Vec<AddressBlock> =
        blocks.into_iter().filter(|b| b.is_reserved()).collect();

    let plan = VlanPlan {
        vlan_id,
        network,
        subnet: network.lo(),
        netmask: network.netmask(),
        default_gateway: default_gateway(&network),
        net_start,
        net_end,
        total_ips: network.host_count(),
        assignable_ips,
        reserved_ranges,
    };
    log::info!(
        "VLAN {} planned on {} ({} assignable)",
        plan.vlan_id,
        plan.network,
        plan.assignable_ips
    );
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReservedPolicy;
    use crate::error::FormatError;

    #[test]
    fn test_validate_vlan_configuration() {
        let plan =
            validate_vlan_configuration(100, "192.168.1.0", "/24", &Settings::default()).unwrap();
        assert_eq!(plan.vlan_id.get(), 100);
        assert_eq!(plan.network.to_string(), "192.168.1.0/24");
        assert_eq!(plan.subnet.to_string(), "192.168.1.0");
        assert_eq!(plan.netmask.to_string(), "255.255.255.0");
        assert_eq!(plan.default_gateway.to_string(), "192.168.1.1");
        assert_eq!(plan.net_start.to_string(), "192.168.1.7");
        assert_eq!(plan.net_end.to_string(), "192.168.1.253");
        assert_eq!(plan.total_ips, 254);
        assert_eq!(plan.assignable_ips, 247);
        assert_eq!(plan.reserved_ranges.len(), 2);
    }

    #[test]
    fn test_invalid_vlan_id() {
        let settings = Settings::default();
        for id in [0, 4095, -1] {
            assert!(matches!(
                validate_vlan_configuration(id, "192.168.1.0", "/24", &settings),
                Err(PlanError::InvalidVlanId { .. })
            ));
        }
    }

    #[test]
    fn test_site_vlan_window() {
        let settings = Settings {
            min_vlan_id: 100,
            max_vlan_id: 199,
            ..Settings::default()
        };
        assert!(validate_vlan_configuration(150, "10.0.0.0", "/24", &settings).is_ok());
        assert!(validate_vlan_configuration(200, "10.0.0.0", "/24", &settings).is_err());
    }

    #[test]
    fn test_custom_policy_and_bad_mask() {
        let settings = Settings {
            reserved: ReservedPolicy::new(10, 2),
            ..Settings::default()
        };
        let plan =
            validate_vlan_configuration(20, "10.1.2.0", "255.255.255.192", &settings).unwrap();
        assert_eq!(plan.net_start.to_string(), "10.1.2.11");
        assert_eq!(plan.net_end.to_string(), "10.1.2.60");
        assert_eq!(plan.assignable_ips, 50);

        assert_eq!(
            validate_vlan_configuration(20, "10.1.2.0", "255.0.255.0", &settings).unwrap_err(),
            PlanError::Format(FormatError::InvalidMask("255.0.255.0".to_string()))
        );
    }

    #[test]
    fn test_plan_json() {
        let plan =
            validate_vlan_configuration(7, "172.16.0.0", "/28", &Settings::default()).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["vlan_id"], 7);
        assert_eq!(json["network"], "172.16.0.0/28");
        assert_eq!(json["reserved_ranges"][1]["start"], "172.16.0.14");
        assert_eq!(json["reserved_ranges"][0]["kind"], "reserved");
    }
}
