//! Conversions between CIDR prefix lengths and dotted-decimal subnet masks.

use crate::error::FormatError;
use crate::models::{get_cidr_mask, mask_prefix_len, parse_mask, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Build the dotted-decimal subnet mask with `cidr` leading one-bits.
///
/// # Examples
/// ```
/// use ip_space_plan::address_space::cidr_to_subnet_mask;
/// assert_eq!(cidr_to_subnet_mask(24).unwrap(), "255.255.255.0");
/// assert!(cidr_to_subnet_mask(33).is_err());
/// ```
pub fn cidr_to_subnet_mask(cidr: u32) -> Result<String, FormatError> {
    if cidr > MAX_LENGTH as u32 {
        return Err(FormatError::InvalidCidr(cidr));
    }
    let mask = get_cidr_mask(cidr as u8)?;
    Ok(Ipv4Addr::from(mask).to_string())
}

/// Prefix length of a dotted-decimal subnet mask.
///
/// Masks whose one-bits are not a single leading run (e.g. `255.0.255.0`)
/// are rejected with [`FormatError::InvalidMask`].
pub fn subnet_mask_to_cidr(mask: &str) -> Result<u8, FormatError> {
    let bits = parse_mask(mask)?;
    let cidr = mask_prefix_len(bits).ok_or_else(|| {
        log::debug!("Rejecting non-contiguous mask {mask} ({bits:#034b})");
        FormatError::InvalidMask(mask.to_string())
    })?;
    log::trace!("subnet_mask_to_cidr({mask}) = {cidr}");
    Ok(cidr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cidr_to_subnet_mask() {
        assert_eq!(cidr_to_subnet_mask(0).unwrap(), "0.0.0.0");
        assert_eq!(cidr_to_subnet_mask(8).unwrap(), "255.0.0.0");
        assert_eq!(cidr_to_subnet_mask(16).unwrap(), "255.255.0.0");
        assert_eq!(cidr_to_subnet_mask(20).unwrap(), "255.255.240.0");
        assert_eq!(cidr_to_subnet_mask(24).unwrap(), "255.255.255.0");
        assert_eq!(cidr_to_subnet_mask(30).unwrap(), "255.255.255.252");
        assert_eq!(cidr_to_subnet_mask(32).unwrap(), "255.255.255.255");
        assert_eq!(
            cidr_to_subnet_mask(33).unwrap_err(),
            FormatError::InvalidCidr(33)
        );
    }

    #[test]
    fn test_subnet_mask_to_cidr() {
        assert_eq!(subnet_mask_to_cidr("255.255.255.0").unwrap(), 24);
        assert_eq!(subnet_mask_to_cidr("255.255.255.128").unwrap(), 25);
        assert_eq!(subnet_mask_to_cidr("255.255.255.255").unwrap(), 32);
        assert_eq!(subnet_mask_to_cidr("0.0.0.0").unwrap(), 0);
    }

    #[test]
    fn test_subnet_mask_to_cidr_rejects_malformed() {
        assert_eq!(
            subnet_mask_to_cidr("255.255.256.0").unwrap_err(),
            FormatError::InvalidMask("255.255.256.0".to_string())
        );
        assert!(subnet_mask_to_cidr("255.255.255").is_err());
        assert!(subnet_mask_to_cidr("/24").is_err());
    }

    #[test]
    fn test_subnet_mask_to_cidr_rejects_non_contiguous() {
        assert!(subnet_mask_to_cidr("255.0.255.0").is_err());
        assert!(subnet_mask_to_cidr("255.255.255.1").is_err());
        assert!(subnet_mask_to_cidr("0.255.255.255").is_err());
    }

    #[test]
    fn test_round_trip_all_prefixes() {
        for cidr in 0..=32u32 {
            let mask = cidr_to_subnet_mask(cidr).unwrap();
            assert_eq!(subnet_mask_to_cidr(&mask).unwrap() as u32, cidr, "{mask}");
        }
    }
}
