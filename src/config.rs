//! Reservation policy and environment driven settings.
//!
//! Values are read from the process environment; the binary calls
//! `dotenv::dotenv()` first so a local `.env` file can provide them.

use crate::error::ConfigError;
use std::env;

/// Addresses reserved at the start of every usable range (gateway and infrastructure).
pub const RESERVED_START_COUNT: u32 = 6;
/// Addresses reserved at the end of every usable range.
pub const RESERVED_END_COUNT: u32 = 1;

/// Upper bound for either configured reserved count.
pub const MAX_RESERVED_COUNT: u32 = 65_536;

/// Lowest VLAN ID allowed by 802.1Q (0 is reserved).
pub const MIN_VLAN_ID: u16 = 1;
/// Highest VLAN ID allowed by 802.1Q (4095 is reserved).
pub const MAX_VLAN_ID: u16 = 4094;

pub const ENV_RESERVED_START: &str = "IPSPACE_RESERVED_START";
pub const ENV_RESERVED_END: &str = "IPSPACE_RESERVED_END";
pub const ENV_MIN_VLAN_ID: &str = "IPSPACE_MIN_VLAN_ID";
pub const ENV_MAX_VLAN_ID: &str = "IPSPACE_MAX_VLAN_ID";

/// How many usable addresses are carved out for infrastructure at each end of a subnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedPolicy {
    pub start_count: u32,
    pub end_count: u32,
}

impl ReservedPolicy {
    pub fn new(start_count: u32, end_count: u32) -> Self {
        ReservedPolicy {
            start_count,
            end_count,
        }
    }

    /// Total number of reserved addresses when the subnet is big enough to hold them all.
    pub fn total(&self) -> u64 {
        self.start_count as u64 + self.end_count as u64
    }
}

impl Default for ReservedPolicy {
    fn default() -> Self {
        ReservedPolicy::new(RESERVED_START_COUNT, RESERVED_END_COUNT)
    }
}

/// Runtime settings for VLAN planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub reserved: ReservedPolicy,
    pub min_vlan_id: u16,
    pub max_vlan_id: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            reserved: ReservedPolicy::default(),
            min_vlan_id: MIN_VLAN_ID,
            max_vlan_id: MAX_VLAN_ID,
        }
    }
}

impl Settings {
    /// Build settings from `IPSPACE_*` environment variables, keeping defaults for unset keys.
    pub fn from_env() -> Result<Settings, ConfigError> {
        Settings::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Settings, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let start_count = read_value(&lookup, ENV_RESERVED_START, defaults.reserved.start_count)?;
        let end_count = read_value(&lookup, ENV_RESERVED_END, defaults.reserved.end_count)?;
        check_reserved(ENV_RESERVED_START, start_count)?;
        check_reserved(ENV_RESERVED_END, end_count)?;
        let min_vlan_id = read_value(&lookup, ENV_MIN_VLAN_ID, defaults.min_vlan_id)?;
        let max_vlan_id = read_value(&lookup, ENV_MAX_VLAN_ID, defaults.max_vlan_id)?;

        if min_vlan_id < MIN_VLAN_ID || min_vlan_id > max_vlan_id {
            return Err(ConfigError::InvalidValue {
                key: ENV_MIN_VLAN_ID,
                value: min_vlan_id.to_string(),
                reason: format!("must be between {MIN_VLAN_ID} and {max_vlan_id}"),
            });
        }
        if max_vlan_id > MAX_VLAN_ID {
            return Err(ConfigError::InvalidValue {
                key: ENV_MAX_VLAN_ID,
                value: max_vlan_id.to_string(),
                reason: format!("must not exceed {MAX_VLAN_ID}"),
            });
        }

        let settings = Settings {
            reserved: ReservedPolicy::new(start_count, end_count),
            min_vlan_id,
            max_vlan_id,
        };
        log::debug!("Loaded settings {:?}", settings);
        Ok(settings)
    }
}

fn check_reserved(key: &'static str, count: u32) -> Result<(), ConfigError> {
    if count > MAX_RESERVED_COUNT {
        return Err(ConfigError::InvalidValue {
            key,
            value: count.to_string(),
            reason: format!("must not exceed {MAX_RESERVED_COUNT}"),
        });
    }
    Ok(())
}

fn read_value<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidValue {
                key,
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.reserved.start_count, 6);
        assert_eq!(settings.reserved.end_count, 1);
        assert_eq!(settings.reserved.total(), 7);
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            (ENV_RESERVED_START, "10"),
            (ENV_RESERVED_END, " 2 "),
            (ENV_MAX_VLAN_ID, "1000"),
        ]))
        .unwrap();
        assert_eq!(settings.reserved, ReservedPolicy::new(10, 2));
        assert_eq!(settings.min_vlan_id, 1);
        assert_eq!(settings.max_vlan_id, 1000);
    }

    #[test]
    fn test_invalid_number() {
        let err = Settings::from_lookup(lookup_from(&[(ENV_RESERVED_START, "six")])).unwrap_err();
        assert!(err.to_string().contains(ENV_RESERVED_START));
    }

    #[test]
    fn test_reserved_count_limit() {
        let settings =
            Settings::from_lookup(lookup_from(&[(ENV_RESERVED_START, "65536")])).unwrap();
        assert_eq!(settings.reserved.start_count, MAX_RESERVED_COUNT);

        let err = Settings::from_lookup(lookup_from(&[(ENV_RESERVED_START, "4294967295")]))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_RESERVED_START));
        assert!(Settings::from_lookup(lookup_from(&[(ENV_RESERVED_END, "65537")])).is_err());
    }

    #[test]
    fn test_invalid_vlan_bounds() {
        assert!(Settings::from_lookup(lookup_from(&[(ENV_MAX_VLAN_ID, "4095")])).is_err());
        assert!(Settings::from_lookup(lookup_from(&[(ENV_MIN_VLAN_ID, "0")])).is_err());
        assert!(Settings::from_lookup(lookup_from(&[
            (ENV_MIN_VLAN_ID, "200"),
            (ENV_MAX_VLAN_ID, "100")
        ]))
        .is_err());
    }
}
