//! 802.1Q VLAN identifier.

use crate::config::{MAX_VLAN_ID, MIN_VLAN_ID};
use crate::error::PlanError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A VLAN ID in the range 1..=4094 (0 and 4095 are reserved by 802.1Q).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "i64", into = "u16")]
pub struct VlanId(u16);

impl VlanId {
    /// True if `id` is a usable 802.1Q VLAN ID.
    pub fn is_valid(id: i64) -> bool {
        (MIN_VLAN_ID as i64..=MAX_VLAN_ID as i64).contains(&id)
    }

    /// Accept `id` only when it also lies within a site specific `min..=max` window.
    pub fn within(id: i64, min: u16, max: u16) -> Result<VlanId, PlanError> {
        if VlanId::is_valid(id) && (min as i64..=max as i64).contains(&id) {
            Ok(VlanId(id as u16))
        } else {
            Err(PlanError::InvalidVlanId { id, min, max })
        }
    }

    pub fn get(&self) -> u16 {
        self.0
    }
}

impl TryFrom<i64> for VlanId {
    type Error = PlanError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        VlanId::within(id, MIN_VLAN_ID, MAX_VLAN_ID)
    }
}

impl From<VlanId> for u16 {
    fn from(id: VlanId) -> u16 {
        id.0
    }
}

impl fmt::Display for VlanId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
