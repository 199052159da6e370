//! VLAN plan report, as a quoted CSV table or as JSON.

use crate::planning::{AddressBlock, BlockKind, IpAvailability, VlanPlan};
use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;
use std::net::Ipv4Addr;

use super::terminal::format_field;

/// Everything printed for one planned VLAN.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlanReport {
    pub plan: VlanPlan,
    pub availability: IpAvailability,
    pub next_available: Option<Ipv4Addr>,
}

/// One address block of the plan, ready for printing.
#[derive(Debug, PartialEq, Eq)]
pub struct BlockPrintRow {
    pub j: usize,
    pub kind: &'static str,
    pub start: String,
    pub end: String,
    pub count: u64,
    pub description: &'static str,
}

/// All blocks of the plan, assignable block included, in address order.
pub fn block_rows(plan: &VlanPlan) -> Vec<BlockPrintRow> {
    let assignable = AddressBlock {
        start: plan.net_start,
        end: plan.net_end,
        kind: BlockKind::Assignable,
        description: "Assignable IPs",
    };
    plan.reserved_ranges
        .iter()
        .chain(std::iter::once(&assignable))
        .sorted_by_key(|b| b.start)
        .enumerate()
        .map(|(i, b)| BlockPrintRow {
            j: i + 1,
            kind: match b.kind {
                BlockKind::Reserved => "reserved",
                BlockKind::Assignable => "assignable",
            },
            start: b.start.to_string(),
            end: b.end.to_string(),
            count: b.len(),
            description: b.description,
        })
        .collect()
}

/// Render the report as pretty JSON.
pub fn report_json(report: &PlanReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Print the report to stdout.
pub fn print_report(report: &PlanReport) {
    let plan = &report.plan;
    let availability = &report.availability;
    log::info!("#Start print_report() for VLAN {}", plan.vlan_id);

    println!(
        "# VLAN {vlan} {network} netmask {netmask} gateway {gateway}",
        vlan = plan.vlan_id.to_string().bold(),
        network = plan.network,
        netmask = plan.netmask,
        gateway = plan.default_gateway,
    );
    println!(
        r#" "cnt",        "kind",           "start",             "end", "count",                     "description""#
    );
    for row in block_rows(plan) {
        print_block_row(&row);
    }
    println!(
        "# {assigned}/{assignable} assigned, {available} available, {reserved} reserved, utilization {pct:.2}% [{band}]",
        assigned = availability.assigned_ips,
        assignable = plan.assignable_ips,
        available = availability.available_ips,
        reserved = availability.reserved_ips,
        pct = availability.utilization_percentage,
        band = availability.status.colored(),
    );
    match report.next_available {
        Some(ip) => println!("# next available {ip}"),
        None => println!("#{}# no assignable address left", "NOTE".on_red()),
    }
}

fn print_block_row(row: &BlockPrintRow) {
    println!(
        "{j},{kind},{start},{end},{count},{description}",
        j = format_field(row.j, 6),
        kind = format_field(row.kind, 13),
        start = format_field(&row.start, 17),
        end = format_field(&row.end, 17),
        count = format_field(row.count, 8),
        description = format_field(row.description, 30),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ReservedPolicy, Settings};
    use crate::models::Ipv4;
    use crate::planning::{ip_availability, next_available_ip, validate_vlan_configuration};

    fn report(subnet: &str, netmask: &str) -> PlanReport {
        let plan = validate_vlan_configuration(10, subnet, netmask, &Settings::default()).unwrap();
        let policy = ReservedPolicy::default();
        let availability = ip_availability(&plan.network, 3, &policy);
        let next_available = next_available_ip(&plan.network, &[], &policy);
        PlanReport {
            plan,
            availability,
            next_available,
        }
    }

    #[test]
    fn test_block_rows_order() {
        let r = report("192.168.1.0", "/24");
        let rows = block_rows(&r.plan);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].kind, "reserved");
        assert_eq!(rows[0].start, "192.168.1.1");
        assert_eq!(rows[1].kind, "assignable");
        assert_eq!(rows[1].count, 247);
        assert_eq!(rows[2].start, "192.168.1.254");
        assert_eq!(rows[2].j, 3);
    }

    #[test]
    fn test_report_json() {
        let r = report("10.20.0.0", "255.255.255.0");
        let json: serde_json::Value = serde_json::from_str(&report_json(&r).unwrap()).unwrap();
        assert_eq!(json["plan"]["network"], "10.20.0.0/24");
        assert_eq!(json["availability"]["assigned_ips"], 3);
        assert_eq!(json["availability"]["status"], "healthy");
        assert_eq!(json["next_available"], "10.20.0.7");
        assert_eq!(r.plan.network, Ipv4::new("10.20.0.0/24").unwrap());
    }
}
