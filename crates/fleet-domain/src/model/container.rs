//! Container entity

use serde::{Deserialize, Serialize};

use fleet_types::ContainerId;

/// A shipping container.
///
/// A container is either unplaced, aboard exactly one ship, or on exactly
/// one truck; the placement lives in [`ShipContainer`](super::ShipContainer)
/// / [`TruckContainer`](super::TruckContainer) rows, never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: ContainerId,
    /// Unique display name, 1-100 characters.
    pub name: String,
}
