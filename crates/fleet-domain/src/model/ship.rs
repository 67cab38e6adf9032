//! Ship entity

use serde::{Deserialize, Serialize};

use fleet_types::ShipId;

use super::Carrier;

/// A ship able to carry containers in any order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    pub id: ShipId,
    /// Unique display name, 1-100 characters.
    pub name: String,
    pub maximum_capacity: u32,
}

impl Carrier for Ship {
    fn maximum_capacity(&self) -> u32 {
        self.maximum_capacity
    }
}
