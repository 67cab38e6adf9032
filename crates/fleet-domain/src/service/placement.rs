//! Placement invariant checker
//!
//! Answers "where, if anywhere, is this container currently placed".
//! Read-only; every load path consults this before creating a placement
//! row, which is what keeps a container on at most one carrier.

use fleet_types::{ContainerId, ShipId, StoreError, TruckId};

use crate::repository::EntityStore;

/// Current placement of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Unplaced,
    OnShip(ShipId),
    OnTruck(TruckId),
}

/// Report the current placement of a container.
///
/// The truck junction is consulted before the ship junction, matching the
/// order the load workflows check them in.
pub fn placement_of<S: EntityStore + ?Sized>(
    store: &S,
    container_id: ContainerId,
) -> Result<Placement, StoreError> {
    if let Some(row) = store.truck_container_by_container(container_id)? {
        return Ok(Placement::OnTruck(row.truck_id));
    }

    if let Some(row) = store.ship_container_by_container(container_id)? {
        return Ok(Placement::OnShip(row.ship_id));
    }

    Ok(Placement::Unplaced)
}
