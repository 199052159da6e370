//! MAC address value type.

use crate::error::FormatError;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    // Six hex pairs, one separator style throughout
    static ref MAC_RE: Regex = Regex::new(
        r"^(?:[0-9A-Fa-f]{2}(?::[0-9A-Fa-f]{2}){5}|[0-9A-Fa-f]{2}(?:-[0-9A-Fa-f]{2}){5})$"
    )
    .expect("Invalid Regex?");
}

/// A 48-bit hardware address.
///
/// Parses from six hex pairs separated uniformly by `:` or `-` and always
/// displays in the canonical uppercase, colon separated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    pub fn new(octets: [u8; 6]) -> Self {
        MacAddress(octets)
    }

    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// True if `s` has the shape of a separated MAC address.
    pub fn is_well_formed(s: &str) -> bool {
        MAC_RE.is_match(s)
    }
}

impl FromStr for MacAddress {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !MacAddress::is_well_formed(s) {
            return Err(FormatError::InvalidMac(s.to_string()));
        }
        let mut octets = [0u8; 6];
        for (octet, pair) in octets.iter_mut().zip(s.split(|c: char| c == ':' || c == '-')) {
            *octet =
                u8::from_str_radix(pair, 16).map_err(|_| FormatError::InvalidMac(s.to_string()))?;
        }
        Ok(MacAddress(octets))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0.iter().map(|b| format!("{:02X}", b)).join(":")
        )
    }
}

impl Serialize for MacAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MacAddress {
    fn deserialize<D>(deserializer: D) -> Result<MacAddress, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        MacAddress::from_str(&s).map_err(de::Error::custom)
    }
}
