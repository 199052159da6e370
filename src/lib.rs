//! IPv4 address-space planning for VLAN based networks.
//!
//! - [`address_space`] - mask conversion, network arithmetic, reserved
//!   addresses, field validation and utilization bands
//! - [`planning`] - VLAN subnet layout, assignability and availability
//! - [`models`] - value types shared by both
//! - [`output`] - report rendering for the command line tool

pub mod address_space;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod planning;

pub use config::{ReservedPolicy, Settings};
pub use error::{ConfigError, FormatError, PlanError};

use itertools::Itertools;
use output::PlanReport;
use std::net::Ipv4Addr;

/// Plan a VLAN and gather its availability figures in one go.
///
/// `assigned` lists the addresses already handed out in the subnet; duplicates
/// and entries outside the subnet are ignored.
pub fn build_report(
    vlan_id: i64,
    subnet: &str,
    netmask: &str,
    assigned: &[Ipv4Addr],
    settings: &Settings,
) -> Result<PlanReport, PlanError> {
    let plan = planning::validate_vlan_configuration(vlan_id, subnet, netmask, settings)?;
    let network = plan.network;

    let in_subnet: Vec<Ipv4Addr> = assigned
        .iter()
        .copied()
        .unique()
        .filter(|ip| {
            let inside = network.contains(*ip);
            if !inside {
                log::warn!("Ignoring {ip}, not inside {network}");
            }
            inside
        })
        .collect();

    let availability =
        planning::ip_availability(&network, in_subnet.len() as u64, &settings.reserved);
    let next_available = planning::next_available_ip(&network, &in_subnet, &settings.reserved);

    Ok(PlanReport {
        plan,
        availability,
        next_available,
    })
}
