//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] for representing an address together with its prefix
//! length, along with the bit-level helpers every subnet calculation is built on.
//! All arithmetic is done on the full 32-bit value so carries cross octet
//! boundaries.

use crate::error::FormatError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ip_space_plan::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, FormatError> {
    if len > MAX_LENGTH {
        Err(FormatError::InvalidCidr(len as u32))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Prefix length of a mask, or `None` when its one-bits are not contiguous.
pub fn mask_prefix_len(mask: u32) -> Option<u8> {
    let len = mask.leading_ones() as u8;
    // Everything after the leading run must be zero
    if mask.checked_shl(len as u32).unwrap_or(0) == 0 {
        Some(len)
    } else {
        None
    }
}

/// Parse a dotted-decimal address: four decimal octets, no whitespace, no leading zeros.
pub fn parse_addr(s: &str) -> Result<Ipv4Addr, FormatError> {
    Ipv4Addr::from_str(s).map_err(|_| FormatError::InvalidAddress(s.to_string()))
}

/// Parse a dotted-decimal subnet mask into its bits. Contiguity is not checked here.
pub fn parse_mask(s: &str) -> Result<u32, FormatError> {
    Ipv4Addr::from_str(s)
        .map(u32::from)
        .map_err(|_| FormatError::InvalidMask(s.to_string()))
}

/// IPv4 address with CIDR notation support.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    addr: Ipv4Addr,
    mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, FormatError> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| FormatError::InvalidAddress(addr_cidr.to_string()))?;
        let addr = parse_addr(addr)?;
        let mask: u8 = mask
            .parse()
            .map_err(|_| FormatError::InvalidMask(mask.to_string()))?;
        Ipv4::from_parts(addr, mask)
    }

    /// Create a new [`Ipv4`] from an address and prefix length.
    pub fn from_parts(addr: Ipv4Addr, mask: u8) -> Result<Ipv4, FormatError> {
        if mask > MAX_LENGTH {
            return Err(FormatError::InvalidCidr(mask as u32));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// The address as given, host bits included.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn prefix_len(&self) -> u8 {
        self.mask
    }

    fn mask_bits(&self) -> u32 {
        match self.mask {
            0 => 0,
            len => u32::MAX << (MAX_LENGTH - len),
        }
    }

    /// The subnet mask as a dotted-decimal address.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.mask_bits())
    }

    /// This subnet with the host bits cleared.
    pub fn network(&self) -> Ipv4 {
        Ipv4 {
            addr: self.lo(),
            mask: self.mask,
        }
    }

    /// Get the broadcast address for this subnet.
    pub fn broadcast(&self) -> Ipv4 {
        Ipv4 {
            addr: self.hi(),
            mask: self.mask,
        }
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !self.mask_bits())
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.mask_bits())
    }

    /// Number of addresses covered by the subnet.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }

    /// Number of usable host addresses.
    pub fn host_count(&self) -> u64 {
        match self.mask {
            31 | 32 => self.size(),
            _ => self.size() - 2,
        }
    }

    /// First usable host address.
    pub fn first_host(&self) -> Ipv4Addr {
        match self.mask {
            31 | 32 => self.lo(),
            _ => Ipv4Addr::from(u32::from(self.lo()) + 1),
        }
    }

    /// Last usable host address.
    pub fn last_host(&self) -> Ipv4Addr {
        match self.mask {
            31 | 32 => self.hi(),
            _ => Ipv4Addr::from(u32::from(self.hi()) - 1),
        }
    }

    /// True if `ip` lies within this subnet, network and broadcast included.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        u32::from(ip) & self.mask_bits() == u32::from(self.lo())
    }

    /// True if `ip` is a usable host of this subnet.
    pub fn is_host(&self, ip: Ipv4Addr) -> bool {
        let ip = u32::from(ip);
        ip >= u32::from(self.first_host()) && ip <= u32::from(self.last_host())
    }

    /// Iterate the usable host addresses in ascending order.
    pub fn hosts(&self) -> impl Iterator<Item = Ipv4Addr> {
        (u32::from(self.first_host())..=u32::from(self.last_host())).map(Ipv4Addr::from)
    }

    /// Zero-based index of `ip` among the usable hosts.
    pub fn host_index(&self, ip: Ipv4Addr) -> Option<u64> {
        if self.is_host(ip) {
            Some((u32::from(ip) - u32::from(self.first_host())) as u64)
        } else {
            None
        }
    }

    /// Host address at a zero-based index, if the subnet is large enough.
    pub fn nth_host(&self, index: u64) -> Option<Ipv4Addr> {
        if index >= self.host_count() {
            return None;
        }
        Some(Ipv4Addr::from(u32::from(self.first_host()) + index as u32))
    }
}

impl FromStr for Ipv4 {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
