//! Error types for fleet-manager

use thiserror::Error;

/// Broad classification of a failed operation.
///
/// The calling layer maps these onto transport responses or process exit
/// codes; the services themselves only ever produce a [`DomainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request violates a business rule.
    Validation,
    /// A referenced container, ship or truck does not exist.
    NotFound,
    /// Unexpected persistence failure.
    Server,
}

/// Every way a fleet operation can be rejected.
///
/// Messages are stable; limit-bound variants carry the configured limit so
/// the message reports it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // Shared create-validation failures
    #[error("Name cannot be empty.")]
    NameCannotBeEmpty,
    #[error("Name cannot exceed {0} characters.")]
    NameTooLong(usize),
    #[error("Name must be unique.")]
    NameMustBeUnique,
    #[error("Capacity must be between 1 and {0}.")]
    CapacityOutOfBounds(u32),

    // Containers
    #[error("Container not found.")]
    ContainerNotFound,
    #[error("The specified container has not been loaded.")]
    ContainerNotLoaded,
    #[error("The specified container is loaded in a ship. Please unload it and try again.")]
    ContainerLoadedInShip,
    #[error("The specified container is loaded in a truck. Please unload it and try again.")]
    ContainerLoadedInTruck,

    // Ships
    #[error("Ship not found.")]
    ShipNotFound,
    #[error("The Source Ship was not found.")]
    SourceShipNotFound,
    #[error("The Destination Ship was not found.")]
    DestinationShipNotFound,
    #[error("Ship is fully loaded.")]
    ShipIsFull,
    #[error("Destination Ship is fully loaded.")]
    DestinationShipIsFull,
    #[error("The container is loaded in another ship.")]
    LoadedInAnotherShip,
    #[error("The container is already loaded in the specified ship.")]
    AlreadyInDestinationShip,
    #[error("The specified container does not belong to the Source Ship.")]
    NotInSourceShip,
    #[error("Destination Ship cannot be the same with the Source Ship.")]
    SameSourceAndDestinationShip,

    // Trucks
    #[error("Truck not found.")]
    TruckNotFound,
    #[error("The Source Truck was not found.")]
    SourceTruckNotFound,
    #[error("The Destination Truck was not found.")]
    DestinationTruckNotFound,
    #[error("Truck is fully loaded.")]
    TruckIsFull,
    #[error("Destination Truck is fully loaded.")]
    DestinationTruckIsFull,
    #[error("The specified truck is empty.")]
    TruckIsEmpty,
    #[error("The Source truck is empty.")]
    SourceTruckIsEmpty,
    #[error("The container is already loaded in another truck.")]
    LoadedInAnotherTruck,
    #[error("The container is already loaded in the specified truck.")]
    AlreadyInDestinationTruck,
    #[error("The specified container does not belong to the Source Truck.")]
    NotInSourceTruck,
    #[error("Destination Truck cannot be the same with the Source Truck.")]
    SameSourceAndDestinationTruck,
    #[error("Container is unreachable, cannot unload it. Unload the latest loaded container and try again.")]
    NotLatestLoaded,

    // Infrastructure
    #[error("Storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    /// Classification used by callers to pick a response or exit code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::ContainerNotFound
            | DomainError::ShipNotFound
            | DomainError::SourceShipNotFound
            | DomainError::DestinationShipNotFound
            | DomainError::TruckNotFound
            | DomainError::SourceTruckNotFound
            | DomainError::DestinationTruckNotFound => ErrorKind::NotFound,
            DomainError::Storage(_) => ErrorKind::Server,
            _ => ErrorKind::Validation,
        }
    }
}

/// Infrastructure errors from the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_kinds() {
        assert_eq!(DomainError::ContainerNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(DomainError::SourceShipNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(DomainError::DestinationTruckNotFound.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_validation_kinds() {
        assert_eq!(DomainError::ShipIsFull.kind(), ErrorKind::Validation);
        assert_eq!(DomainError::NotLatestLoaded.kind(), ErrorKind::Validation);
        assert_eq!(DomainError::NameMustBeUnique.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_server_kind() {
        let err = DomainError::Storage("disk gone".to_string());
        assert_eq!(err.kind(), ErrorKind::Server);
    }

    #[test]
    fn test_limit_bound_messages_carry_the_limit() {
        assert_eq!(
            DomainError::NameTooLong(100).to_string(),
            "Name cannot exceed 100 characters."
        );
        assert_eq!(
            DomainError::CapacityOutOfBounds(4).to_string(),
            "Capacity must be between 1 and 4."
        );
    }
}
