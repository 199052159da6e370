//! Error types for address-space calculations and VLAN planning.

use std::net::Ipv4Addr;

/// Malformed input to one of the conversion or arithmetic functions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Invalid CIDR prefix length: {0}. Must be between 0 and 32")]
    InvalidCidr(u32),
    #[error("Invalid subnet mask: {0}")]
    InvalidMask(String),
    #[error("Invalid IPv4 address: {0}")]
    InvalidAddress(String),
    #[error("Invalid MAC address: {0}")]
    InvalidMac(String),
}

/// Failures while building a VLAN plan or checking an allocation against one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("VLAN ID must be between {min} and {max}, got {id}")]
    InvalidVlanId { id: i64, min: u16, max: u16 },
    #[error("Subnet too small. Need at least {needed} host addresses, but subnet only provides {available}")]
    InsufficientSpace { needed: u64, available: u64 },
    #[error("{ip} is not inside {network}")]
    AddressNotInSubnet { ip: Ipv4Addr, network: String },
    #[error("IP {0} is reserved and cannot be assigned")]
    ReservedAddress(Ipv4Addr),
}

/// Invalid values found while loading settings from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}
