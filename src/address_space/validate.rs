//! Format checks for form fields. None of these ever fail; bad input gives
//! `false` or, for [`format_mac_address`], the input back unchanged.

use crate::models::{parse_addr, MacAddress, VlanId};
use itertools::Itertools;

/// Four dot-separated decimal octets in 0..=255 and nothing else.
pub fn is_valid_ip_address(s: &str) -> bool {
    parse_addr(s).is_ok()
}

/// Six hex pairs separated uniformly by `:` or `-`.
pub fn is_valid_mac_address(s: &str) -> bool {
    MacAddress::is_well_formed(s)
}

/// Normalize a MAC address to `AA:BB:CC:DD:EE:FF`.
///
/// Every non-hex character is dropped first; if exactly twelve hex digits
/// remain they are regrouped, otherwise `s` is returned as is.
pub fn format_mac_address(s: &str) -> String {
    let hex: Vec<char> = s
        .chars()
        .filter(char::is_ascii_hexdigit)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if hex.len() != 12 {
        log::trace!("format_mac_address({s:?}) left unchanged");
        return s.to_string();
    }
    hex.chunks(2).map(|pair| pair.iter().collect::<String>()).join(":")
}

/// VLAN IDs 1..=4094; 0 and 4095 are reserved by 802.1Q.
pub fn is_valid_vlan_id(n: i64) -> bool {
    VlanId::is_valid(n)
}
