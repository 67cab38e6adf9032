//! Truck entity

use serde::{Deserialize, Serialize};

use fleet_types::TruckId;

use super::Carrier;

/// A truck carrying containers under stack discipline: the most recently
/// loaded container must be the first one unloaded or transferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Truck {
    pub id: TruckId,
    /// Unique display name, 1-100 characters.
    pub name: String,
    pub maximum_capacity: u32,
}

impl Carrier for Truck {
    fn maximum_capacity(&self) -> u32 {
        self.maximum_capacity
    }
}
