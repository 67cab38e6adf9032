//! Container CRUD service

use fleet_domain::model::Container;
use fleet_domain::repository::EntityStore;
use fleet_domain::service::validate_name;
use fleet_types::{ContainerId, DomainError, Result};

/// Maximum length allowed for a container name.
pub const CONTAINER_NAME_MAXIMUM_LENGTH: usize = 100;

/// Create a new container with the given name.
pub fn create<S: EntityStore>(store: &mut S, name: &str) -> Result<ContainerId> {
    validate_name(name, CONTAINER_NAME_MAXIMUM_LENGTH)?;

    if store.container_name_taken(name)? {
        return Err(DomainError::NameMustBeUnique);
    }

    let container = store.insert_container(name)?;
    store.commit()?;

    tracing::info!(id = container.id, name, "container created");

    Ok(container.id)
}

/// Get a container by id.
pub fn get<S: EntityStore>(store: &S, container_id: ContainerId) -> Result<Container> {
    store
        .container(container_id)?
        .ok_or(DomainError::ContainerNotFound)
}

/// All containers, sorted by name.
pub fn list<S: EntityStore>(store: &S) -> Result<Vec<Container>> {
    Ok(store.containers()?)
}

/// Delete a container. Rejected while the container is placed anywhere.
pub fn delete<S: EntityStore>(store: &mut S, container_id: ContainerId) -> Result<()> {
    if store.container(container_id)?.is_none() {
        return Err(DomainError::ContainerNotFound);
    }

    if store.ship_container_by_container(container_id)?.is_some() {
        return Err(DomainError::ContainerLoadedInShip);
    }

    if store.truck_container_by_container(container_id)?.is_some() {
        return Err(DomainError::ContainerLoadedInTruck);
    }

    store.remove_container(container_id)?;
    store.commit()?;

    tracing::info!(id = container_id, "container deleted");

    Ok(())
}
