//! Placement junction rows

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fleet_types::{ContainerId, ShipContainerId, ShipId, TruckContainerId, TruckId};

/// "This container is currently aboard this ship."
///
/// Created on load, deleted on unload; `ship_id` is rewritten in place on
/// transfer. A container appears in at most one row at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipContainer {
    pub id: ShipContainerId,
    pub ship_id: ShipId,
    pub container_id: ContainerId,
}

/// "This container is currently on this truck."
///
/// `load_seq` is assigned by the store from a monotonic counter on load and
/// on transfer; it alone decides which container is the latest loaded.
/// `date_loaded` is informational and may tie under concurrent loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruckContainer {
    pub id: TruckContainerId,
    pub truck_id: TruckId,
    pub container_id: ContainerId,
    pub date_loaded: DateTime<Utc>,
    pub load_seq: u64,
}
