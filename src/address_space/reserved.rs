//! Infrastructure-reserved addresses within a subnet's usable range.
//!
//! Policy, not protocol: by default the first [`RESERVED_START_COUNT`] usable
//! addresses (gateway and friends) and the last [`RESERVED_END_COUNT`] are held back.
//!
//! [`RESERVED_START_COUNT`]: crate::config::RESERVED_START_COUNT
//! [`RESERVED_END_COUNT`]: crate::config::RESERVED_END_COUNT

use super::network::parse_subnet;
use crate::config::ReservedPolicy;
use crate::error::FormatError;
use crate::models::Ipv4;
use std::net::Ipv4Addr;

/// Reserved host addresses of `net` in ascending order.
///
/// Never runs past the last usable host and never lists an address twice,
/// so small subnets yield fewer than `policy.total()` entries.
pub fn reserved_hosts(net: &Ipv4, policy: &ReservedPolicy) -> Vec<Ipv4Addr> {
    let (start, end_from, hosts) = reserved_bounds(net, policy);
    (0..start)
        .chain(end_from..hosts)
        .filter_map(|i| net.nth_host(i))
        .collect()
}

/// Number of addresses [`reserved_hosts`] returns, without listing them.
pub fn reserved_count(net: &Ipv4, policy: &ReservedPolicy) -> u64 {
    let (start, end_from, hosts) = reserved_bounds(net, policy);
    start + (hosts - end_from)
}

/// Host indexes `0..start` and `end_from..hosts` are reserved; the two runs never overlap.
fn reserved_bounds(net: &Ipv4, policy: &ReservedPolicy) -> (u64, u64, u64) {
    let hosts = net.host_count();
    let start = (policy.start_count as u64).min(hosts);
    let end_from = hosts.saturating_sub(policy.end_count as u64).max(start);
    (start, end_from, hosts)
}

/// Reserved addresses for a network and dotted-decimal mask under the default 6 + 1 policy.
pub fn generate_reserved_ips(network: &str, mask: &str) -> Result<Vec<String>, FormatError> {
    generate_reserved_ips_with(network, mask, &ReservedPolicy::default())
}

/// Same as [`generate_reserved_ips`] with a caller supplied policy.
pub fn generate_reserved_ips_with(
    network: &str,
    mask: &str,
    policy: &ReservedPolicy,
) -> Result<Vec<String>, FormatError> {
    let net = parse_subnet(network, mask)?;
    let reserved = reserved_hosts(&net, policy);
    if (reserved.len() as u64) < policy.total() {
        log::debug!(
            "{} only has room for {} of {} reserved addresses",
            net.network(),
            reserved.len(),
            policy.total()
        );
    }
    Ok(reserved.iter().map(|ip| ip.to_string()).collect())
}
