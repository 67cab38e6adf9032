//! Truck loading/unloading/transfer workflow
//!
//! Same shape as the ship workflow with one extra rule: trucks unload
//! under stack discipline, so only the most recently loaded container may
//! be unloaded or transferred. Truck operations are request/response only
//! and broadcast nothing.

use chrono::Utc;

use fleet_domain::model::{Carrier, TruckContainer};
use fleet_domain::repository::EntityStore;
use fleet_domain::service::{placement_of, Placement};
use fleet_types::{ContainerId, DomainError, Result, TruckContainerId, TruckId};

/// Load a container onto a truck.
pub fn load<S: EntityStore>(
    store: &mut S,
    truck_id: TruckId,
    container_id: ContainerId,
) -> Result<TruckContainerId> {
    validate_load(store, truck_id, container_id)?;

    let row = store.insert_truck_container(truck_id, container_id, Utc::now())?;
    store.commit()?;

    tracing::info!(truck_id, container_id, "container loaded onto truck");

    Ok(row.id)
}

/// Unload a container from a truck. Only the latest-loaded container of
/// the truck is reachable.
pub fn unload<S: EntityStore>(
    store: &mut S,
    truck_id: TruckId,
    container_id: ContainerId,
) -> Result<()> {
    let row = validate_unload(store, truck_id, container_id)?;

    store.remove_truck_container(row.id)?;
    store.commit()?;

    tracing::info!(truck_id, container_id, "container unloaded from truck");

    Ok(())
}

/// Move a container from one truck to another in a single operation. The
/// container must be the source truck's latest-loaded; its load timestamp
/// and sequence are refreshed, placing it on top of the destination stack.
pub fn transfer<S: EntityStore>(
    store: &mut S,
    source_truck_id: TruckId,
    destination_truck_id: TruckId,
    container_id: ContainerId,
) -> Result<TruckContainerId> {
    let row = validate_transfer(store, source_truck_id, destination_truck_id, container_id)?;

    store.move_truck_container(row.id, destination_truck_id, Utc::now())?;
    store.commit()?;

    tracing::info!(
        source_truck_id,
        destination_truck_id,
        container_id,
        "container transferred between trucks"
    );

    Ok(row.id)
}

fn validate_load<S: EntityStore>(
    store: &S,
    truck_id: TruckId,
    container_id: ContainerId,
) -> Result<()> {
    let truck = store.truck(truck_id)?.ok_or(DomainError::TruckNotFound)?;

    // Count before attempting to add; is_full compares with equality.
    let occupants = store.count_truck_containers(truck_id)?;
    if truck.is_full(occupants) {
        return Err(DomainError::TruckIsFull);
    }

    if store.container(container_id)?.is_none() {
        return Err(DomainError::ContainerNotFound);
    }

    match placement_of(store, container_id)? {
        Placement::OnTruck(occupied) if occupied == truck_id => {
            Err(DomainError::AlreadyInDestinationTruck)
        }
        Placement::OnTruck(_) => Err(DomainError::LoadedInAnotherTruck),
        Placement::OnShip(_) => Err(DomainError::ContainerLoadedInShip),
        Placement::Unplaced => Ok(()),
    }
}

fn validate_unload<S: EntityStore>(
    store: &S,
    truck_id: TruckId,
    container_id: ContainerId,
) -> Result<TruckContainer> {
    let row = store
        .truck_container_by_container(container_id)?
        .ok_or(DomainError::ContainerNotLoaded)?;

    if row.truck_id != truck_id {
        return Err(DomainError::LoadedInAnotherTruck);
    }

    let latest = store
        .latest_truck_container(truck_id)?
        .ok_or(DomainError::TruckIsEmpty)?;

    if latest.container_id != container_id {
        return Err(DomainError::NotLatestLoaded);
    }

    Ok(row)
}

fn validate_transfer<S: EntityStore>(
    store: &S,
    source_truck_id: TruckId,
    destination_truck_id: TruckId,
    container_id: ContainerId,
) -> Result<TruckContainer> {
    // Rejected before any lookup, even when neither truck exists.
    if source_truck_id == destination_truck_id {
        return Err(DomainError::SameSourceAndDestinationTruck);
    }

    if store.truck(source_truck_id)?.is_none() {
        return Err(DomainError::SourceTruckNotFound);
    }

    let destination = store
        .truck(destination_truck_id)?
        .ok_or(DomainError::DestinationTruckNotFound)?;

    let row = store
        .truck_container_by_container(container_id)?
        .ok_or(DomainError::ContainerNotFound)?;

    if row.truck_id != source_truck_id {
        if row.truck_id == destination_truck_id {
            return Err(DomainError::AlreadyInDestinationTruck);
        }

        return Err(DomainError::NotInSourceTruck);
    }

    let occupants = store.count_truck_containers(destination_truck_id)?;
    if destination.is_full(occupants) {
        return Err(DomainError::DestinationTruckIsFull);
    }

    let latest = store
        .latest_truck_container(source_truck_id)?
        .ok_or(DomainError::SourceTruckIsEmpty)?;

    if latest.container_id != container_id {
        return Err(DomainError::NotLatestLoaded);
    }

    Ok(row)
}
