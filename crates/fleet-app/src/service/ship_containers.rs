//! Ship loading/unloading/transfer workflow
//!
//! State machine per container: `Unplaced ↔ OnShip`, plus
//! `OnShip → OnShip` via transfer. Moving ship→truck needs an unload
//! followed by a separate truck load; no single operation does it.
//!
//! Each operation validates against current state, mutates the placement
//! row, commits, and then broadcasts to every connection except the
//! originating one.

use fleet_domain::model::{Carrier, Container, ShipContainer};
use fleet_domain::repository::EntityStore;
use fleet_domain::service::{placement_of, Placement};
use fleet_types::{ContainerId, DomainError, Result, ShipContainerId, ShipId};

use crate::notify::{ContainerSummary, ShipEvent, ShipNotifier};

/// Load a container onto a ship.
pub fn load<S: EntityStore, N: ShipNotifier>(
    store: &mut S,
    notifier: &N,
    ship_id: ShipId,
    container_id: ContainerId,
    connection_id: &str,
) -> Result<ShipContainerId> {
    let container = validate_load(store, ship_id, container_id)?;

    let row = store.insert_ship_container(ship_id, container_id)?;
    store.commit()?;

    tracing::info!(ship_id, container_id, "container loaded onto ship");

    notifier.broadcast_except(
        connection_id,
        &ShipEvent::ShipLoaded {
            ship_id,
            container: summary(&container),
        },
    );

    Ok(row.id)
}

/// Unload a container from a ship.
pub fn unload<S: EntityStore, N: ShipNotifier>(
    store: &mut S,
    notifier: &N,
    ship_id: ShipId,
    container_id: ContainerId,
    connection_id: &str,
) -> Result<()> {
    let row = validate_unload(store, ship_id, container_id)?;

    let container = store
        .container(container_id)?
        .ok_or(DomainError::ContainerNotFound)?;

    store.remove_ship_container(row.id)?;
    store.commit()?;

    tracing::info!(ship_id, container_id, "container unloaded from ship");

    notifier.broadcast_except(
        connection_id,
        &ShipEvent::ShipUnloaded {
            ship_id,
            container: summary(&container),
        },
    );

    Ok(())
}

/// Move a container from one ship to another in a single operation.
pub fn transfer<S: EntityStore, N: ShipNotifier>(
    store: &mut S,
    notifier: &N,
    source_ship_id: ShipId,
    destination_ship_id: ShipId,
    container_id: ContainerId,
    connection_id: &str,
) -> Result<ShipContainerId> {
    let row = validate_transfer(store, source_ship_id, destination_ship_id, container_id)?;

    let container = store
        .container(container_id)?
        .ok_or(DomainError::ContainerNotFound)?;

    store.move_ship_container(row.id, destination_ship_id)?;
    store.commit()?;

    tracing::info!(
        source_ship_id,
        destination_ship_id,
        container_id,
        "container transferred between ships"
    );

    notifier.broadcast_except(
        connection_id,
        &ShipEvent::ContainerTransferred {
            source_ship_id,
            destination_ship_id,
            container: summary(&container),
        },
    );

    Ok(row.id)
}

fn validate_load<S: EntityStore>(
    store: &S,
    ship_id: ShipId,
    container_id: ContainerId,
) -> Result<Container> {
    let ship = store.ship(ship_id)?.ok_or(DomainError::ShipNotFound)?;

    // Count before attempting to add; is_full compares with equality.
    let occupants = store.count_ship_containers(ship_id)?;
    if ship.is_full(occupants) {
        return Err(DomainError::ShipIsFull);
    }

    let container = store
        .container(container_id)?
        .ok_or(DomainError::ContainerNotFound)?;

    match placement_of(store, container_id)? {
        Placement::OnTruck(_) => Err(DomainError::ContainerLoadedInTruck),
        Placement::OnShip(_) => Err(DomainError::ContainerLoadedInShip),
        Placement::Unplaced => Ok(container),
    }
}

fn validate_unload<S: EntityStore>(
    store: &S,
    ship_id: ShipId,
    container_id: ContainerId,
) -> Result<ShipContainer> {
    let row = store
        .ship_container_by_container(container_id)?
        .ok_or(DomainError::ContainerNotLoaded)?;

    if row.ship_id != ship_id {
        return Err(DomainError::LoadedInAnotherShip);
    }

    Ok(row)
}

fn validate_transfer<S: EntityStore>(
    store: &S,
    source_ship_id: ShipId,
    destination_ship_id: ShipId,
    container_id: ContainerId,
) -> Result<ShipContainer> {
    // Rejected before any lookup, even when neither ship exists.
    if source_ship_id == destination_ship_id {
        return Err(DomainError::SameSourceAndDestinationShip);
    }

    if store.ship(source_ship_id)?.is_none() {
        return Err(DomainError::SourceShipNotFound);
    }

    let destination = store
        .ship(destination_ship_id)?
        .ok_or(DomainError::DestinationShipNotFound)?;

    let row = store
        .ship_container_by_container(container_id)?
        .ok_or(DomainError::ContainerNotFound)?;

    if row.ship_id != source_ship_id {
        if row.ship_id == destination_ship_id {
            return Err(DomainError::AlreadyInDestinationShip);
        }

        return Err(DomainError::NotInSourceShip);
    }

    let occupants = store.count_ship_containers(destination_ship_id)?;
    if destination.is_full(occupants) {
        return Err(DomainError::DestinationShipIsFull);
    }

    Ok(row)
}

fn summary(container: &Container) -> ContainerSummary {
    ContainerSummary {
        id: container.id,
        name: container.name.clone(),
    }
}
