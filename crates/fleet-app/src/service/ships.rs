//! Ship CRUD service

use fleet_domain::model::Ship;
use fleet_domain::repository::EntityStore;
use fleet_domain::service::validate_name;
use fleet_types::{DomainError, Result, ShipId};

/// Maximum length allowed for a ship name.
pub const SHIP_NAME_MAXIMUM_LENGTH: usize = 100;

/// Maximum number of containers allowed for a ship to hold.
pub const SHIP_MAXIMUM_CAPACITY: u32 = 4;

/// Create a new ship with the given name and capacity.
pub fn create<S: EntityStore>(store: &mut S, name: &str, capacity: u32) -> Result<ShipId> {
    validate_name(name, SHIP_NAME_MAXIMUM_LENGTH)?;

    if capacity == 0 || capacity > SHIP_MAXIMUM_CAPACITY {
        return Err(DomainError::CapacityOutOfBounds(SHIP_MAXIMUM_CAPACITY));
    }

    if store.ship_name_taken(name)? {
        return Err(DomainError::NameMustBeUnique);
    }

    let ship = store.insert_ship(name, capacity)?;
    store.commit()?;

    tracing::info!(id = ship.id, name, capacity, "ship created");

    Ok(ship.id)
}

/// Get a ship by id.
pub fn get<S: EntityStore>(store: &S, ship_id: ShipId) -> Result<Ship> {
    store.ship(ship_id)?.ok_or(DomainError::ShipNotFound)
}

/// All ships, sorted by name.
pub fn list<S: EntityStore>(store: &S) -> Result<Vec<Ship>> {
    Ok(store.ships()?)
}

/// Delete a ship. Its placement rows are removed with it.
pub fn delete<S: EntityStore>(store: &mut S, ship_id: ShipId) -> Result<()> {
    if store.ship(ship_id)?.is_none() {
        return Err(DomainError::ShipNotFound);
    }

    store.remove_ship(ship_id)?;
    store.commit()?;

    tracing::info!(id = ship_id, "ship deleted");

    Ok(())
}
