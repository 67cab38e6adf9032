//! Entity store trait: the transactional unit of work the workflow
//! services run against.
//!
//! An implementation hands out one transaction at a time; the services
//! borrow it mutably for the whole validate-then-mutate sequence, so the
//! window between a count/lookup and the commit is exclusive. Staged
//! writes become visible to other transactions only after `commit`.

use chrono::{DateTime, Utc};

use fleet_types::{
    ContainerId, ShipContainerId, ShipId, StoreError, TruckContainerId, TruckId,
};

use crate::model::{Container, Ship, ShipContainer, Truck, TruckContainer};

pub trait EntityStore {
    // --- Entities ---

    /// Look up a container by id.
    fn container(&self, id: ContainerId) -> Result<Option<Container>, StoreError>;

    /// Look up a ship by id.
    fn ship(&self, id: ShipId) -> Result<Option<Ship>, StoreError>;

    /// Look up a truck by id.
    fn truck(&self, id: TruckId) -> Result<Option<Truck>, StoreError>;

    /// All containers, sorted by name.
    fn containers(&self) -> Result<Vec<Container>, StoreError>;

    /// All ships, sorted by name.
    fn ships(&self) -> Result<Vec<Ship>, StoreError>;

    /// All trucks, sorted by name.
    fn trucks(&self) -> Result<Vec<Truck>, StoreError>;

    fn container_name_taken(&self, name: &str) -> Result<bool, StoreError>;

    fn ship_name_taken(&self, name: &str) -> Result<bool, StoreError>;

    fn truck_name_taken(&self, name: &str) -> Result<bool, StoreError>;

    fn insert_container(&mut self, name: &str) -> Result<Container, StoreError>;

    fn insert_ship(&mut self, name: &str, maximum_capacity: u32) -> Result<Ship, StoreError>;

    fn insert_truck(&mut self, name: &str, maximum_capacity: u32) -> Result<Truck, StoreError>;

    fn remove_container(&mut self, id: ContainerId) -> Result<(), StoreError>;

    /// Removing a ship also removes its placement rows (its containers
    /// become unplaced).
    fn remove_ship(&mut self, id: ShipId) -> Result<(), StoreError>;

    /// Removing a truck also removes its placement rows.
    fn remove_truck(&mut self, id: TruckId) -> Result<(), StoreError>;

    // --- Placements ---

    /// The ship placement row for a container, if it is aboard any ship.
    fn ship_container_by_container(
        &self,
        container_id: ContainerId,
    ) -> Result<Option<ShipContainer>, StoreError>;

    /// The truck placement row for a container, if it is on any truck.
    fn truck_container_by_container(
        &self,
        container_id: ContainerId,
    ) -> Result<Option<TruckContainer>, StoreError>;

    /// The most recently loaded placement row of a truck, decided by the
    /// store-assigned load sequence.
    fn latest_truck_container(
        &self,
        truck_id: TruckId,
    ) -> Result<Option<TruckContainer>, StoreError>;

    fn count_ship_containers(&self, ship_id: ShipId) -> Result<usize, StoreError>;

    fn count_truck_containers(&self, truck_id: TruckId) -> Result<usize, StoreError>;

    fn insert_ship_container(
        &mut self,
        ship_id: ShipId,
        container_id: ContainerId,
    ) -> Result<ShipContainer, StoreError>;

    fn insert_truck_container(
        &mut self,
        truck_id: TruckId,
        container_id: ContainerId,
        date_loaded: DateTime<Utc>,
    ) -> Result<TruckContainer, StoreError>;

    fn remove_ship_container(&mut self, id: ShipContainerId) -> Result<(), StoreError>;

    fn remove_truck_container(&mut self, id: TruckContainerId) -> Result<(), StoreError>;

    /// Rewrite the carrier of a ship placement row in place.
    fn move_ship_container(
        &mut self,
        id: ShipContainerId,
        destination: ShipId,
    ) -> Result<(), StoreError>;

    /// Rewrite the carrier of a truck placement row in place, refreshing
    /// its load timestamp and sequence.
    fn move_truck_container(
        &mut self,
        id: TruckContainerId,
        destination: TruckId,
        date_loaded: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    // --- Transaction ---

    /// Make all staged writes durable. Nothing is persisted before this.
    fn commit(&mut self) -> Result<(), StoreError>;
}
