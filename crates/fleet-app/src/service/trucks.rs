//! Truck CRUD service

use fleet_domain::model::Truck;
use fleet_domain::repository::EntityStore;
use fleet_domain::service::validate_name;
use fleet_types::{DomainError, Result, TruckId};

/// Maximum length allowed for a truck name.
pub const TRUCK_NAME_MAXIMUM_LENGTH: usize = 100;

/// Maximum number of containers allowed for a truck to hold.
pub const TRUCK_MAXIMUM_CAPACITY: u32 = 3;

/// Create a new truck with the given name and capacity.
pub fn create<S: EntityStore>(store: &mut S, name: &str, capacity: u32) -> Result<TruckId> {
    validate_name(name, TRUCK_NAME_MAXIMUM_LENGTH)?;

    if capacity == 0 || capacity > TRUCK_MAXIMUM_CAPACITY {
        return Err(DomainError::CapacityOutOfBounds(TRUCK_MAXIMUM_CAPACITY));
    }

    if store.truck_name_taken(name)? {
        return Err(DomainError::NameMustBeUnique);
    }

    let truck = store.insert_truck(name, capacity)?;
    store.commit()?;

    tracing::info!(id = truck.id, name, capacity, "truck created");

    Ok(truck.id)
}

/// Get a truck by id.
pub fn get<S: EntityStore>(store: &S, truck_id: TruckId) -> Result<Truck> {
    store.truck(truck_id)?.ok_or(DomainError::TruckNotFound)
}

/// All trucks, sorted by name.
pub fn list<S: EntityStore>(store: &S) -> Result<Vec<Truck>> {
    Ok(store.trucks()?)
}

/// Delete a truck. Its placement rows are removed with it.
pub fn delete<S: EntityStore>(store: &mut S, truck_id: TruckId) -> Result<()> {
    if store.truck(truck_id)?.is_none() {
        return Err(DomainError::TruckNotFound);
    }

    store.remove_truck(truck_id)?;
    store.commit()?;

    tracing::info!(id = truck_id, "truck deleted");

    Ok(())
}
