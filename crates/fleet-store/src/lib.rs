//! Persistent store for the fleet entities and their placements
//!
//! One JSON file holds every table plus the id and load-sequence counters.
//! All access goes through a [`StoreTx`] obtained from
//! [`FleetStore::begin`]: the transaction works on a snapshot of the
//! state, and `commit` swaps the snapshot in and writes the file. A
//! transaction that is dropped without committing leaves the store
//! untouched. `begin` borrows the store mutably, so the whole
//! validate-then-mutate sequence of a workflow holds exclusive access.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fleet_domain::model::{Container, Ship, ShipContainer, Truck, TruckContainer};
use fleet_domain::repository::EntityStore;
use fleet_types::{
    ContainerId, ShipContainerId, ShipId, StoreError, TruckContainerId, TruckId,
};

const STORE_FILE: &str = "fleet.json";

/// Everything the store persists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FleetState {
    /// Id counter shared by all tables.
    #[serde(default)]
    next_id: u64,

    /// Monotonic load-sequence counter deciding truck LIFO order.
    #[serde(default)]
    next_seq: u64,

    #[serde(default)]
    containers: BTreeMap<ContainerId, Container>,

    #[serde(default)]
    ships: BTreeMap<ShipId, Ship>,

    #[serde(default)]
    trucks: BTreeMap<TruckId, Truck>,

    #[serde(default)]
    ship_containers: BTreeMap<ShipContainerId, ShipContainer>,

    #[serde(default)]
    truck_containers: BTreeMap<TruckContainerId, TruckContainer>,
}

impl FleetState {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn next_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }
}

/// File-backed store for containers, ships, trucks and placements.
pub struct FleetStore {
    store_path: PathBuf,
    state: FleetState,
}

impl FleetStore {
    /// Create or load a store in the given directory.
    pub fn open(store_dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join(STORE_FILE);

        let state = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader)?
        } else {
            FleetState::default()
        };

        Ok(Self { store_path, state })
    }

    /// Begin a transaction. Exclusive for its whole lifetime.
    pub fn begin(&mut self) -> StoreTx<'_> {
        StoreTx {
            working: self.state.clone(),
            store: self,
        }
    }

    fn save(&self) -> Result<(), StoreError> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.state)?;
        Ok(())
    }
}

/// A snapshot transaction over a [`FleetStore`].
pub struct StoreTx<'a> {
    store: &'a mut FleetStore,
    working: FleetState,
}

impl EntityStore for StoreTx<'_> {
    fn container(&self, id: ContainerId) -> Result<Option<Container>, StoreError> {
        Ok(self.working.containers.get(&id).cloned())
    }

    fn ship(&self, id: ShipId) -> Result<Option<Ship>, StoreError> {
        Ok(self.working.ships.get(&id).cloned())
    }

    fn truck(&self, id: TruckId) -> Result<Option<Truck>, StoreError> {
        Ok(self.working.trucks.get(&id).cloned())
    }

    fn containers(&self) -> Result<Vec<Container>, StoreError> {
        let mut rows: Vec<_> = self.working.containers.values().cloned().collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    fn ships(&self) -> Result<Vec<Ship>, StoreError> {
        let mut rows: Vec<_> = self.working.ships.values().cloned().collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    fn trucks(&self) -> Result<Vec<Truck>, StoreError> {
        let mut rows: Vec<_> = self.working.trucks.values().cloned().collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    fn container_name_taken(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self.working.containers.values().any(|c| c.name == name))
    }

    fn ship_name_taken(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self.working.ships.values().any(|s| s.name == name))
    }

    fn truck_name_taken(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self.working.trucks.values().any(|t| t.name == name))
    }

    fn insert_container(&mut self, name: &str) -> Result<Container, StoreError> {
        let id = self.working.next_id();
        let container = Container {
            id,
            name: name.to_string(),
        };
        self.working.containers.insert(id, container.clone());
        Ok(container)
    }

    fn insert_ship(&mut self, name: &str, maximum_capacity: u32) -> Result<Ship, StoreError> {
        let id = self.working.next_id();
        let ship = Ship {
            id,
            name: name.to_string(),
            maximum_capacity,
        };
        self.working.ships.insert(id, ship.clone());
        Ok(ship)
    }

    fn insert_truck(&mut self, name: &str, maximum_capacity: u32) -> Result<Truck, StoreError> {
        let id = self.working.next_id();
        let truck = Truck {
            id,
            name: name.to_string(),
            maximum_capacity,
        };
        self.working.trucks.insert(id, truck.clone());
        Ok(truck)
    }

    fn remove_container(&mut self, id: ContainerId) -> Result<(), StoreError> {
        self.working.containers.remove(&id);
        Ok(())
    }

    fn remove_ship(&mut self, id: ShipId) -> Result<(), StoreError> {
        self.working.ships.remove(&id);
        self.working.ship_containers.retain(|_, row| row.ship_id != id);
        Ok(())
    }

    fn remove_truck(&mut self, id: TruckId) -> Result<(), StoreError> {
        self.working.trucks.remove(&id);
        self.working.truck_containers.retain(|_, row| row.truck_id != id);
        Ok(())
    }

    fn ship_container_by_container(
        &self,
        container_id: ContainerId,
    ) -> Result<Option<ShipContainer>, StoreError> {
        Ok(self
            .working
            .ship_containers
            .values()
            .find(|row| row.container_id == container_id)
            .cloned())
    }

    fn truck_container_by_container(
        &self,
        container_id: ContainerId,
    ) -> Result<Option<TruckContainer>, StoreError> {
        Ok(self
            .working
            .truck_containers
            .values()
            .find(|row| row.container_id == container_id)
            .cloned())
    }

    fn latest_truck_container(
        &self,
        truck_id: TruckId,
    ) -> Result<Option<TruckContainer>, StoreError> {
        Ok(self
            .working
            .truck_containers
            .values()
            .filter(|row| row.truck_id == truck_id)
            .max_by_key(|row| row.load_seq)
            .cloned())
    }

    fn count_ship_containers(&self, ship_id: ShipId) -> Result<usize, StoreError> {
        Ok(self
            .working
            .ship_containers
            .values()
            .filter(|row| row.ship_id == ship_id)
            .count())
    }

    fn count_truck_containers(&self, truck_id: TruckId) -> Result<usize, StoreError> {
        Ok(self
            .working
            .truck_containers
            .values()
            .filter(|row| row.truck_id == truck_id)
            .count())
    }

    fn insert_ship_container(
        &mut self,
        ship_id: ShipId,
        container_id: ContainerId,
    ) -> Result<ShipContainer, StoreError> {
        let id = self.working.next_id();
        let row = ShipContainer {
            id,
            ship_id,
            container_id,
        };
        self.working.ship_containers.insert(id, row.clone());
        Ok(row)
    }

    fn insert_truck_container(
        &mut self,
        truck_id: TruckId,
        container_id: ContainerId,
        date_loaded: DateTime<Utc>,
    ) -> Result<TruckContainer, StoreError> {
        let id = self.working.next_id();
        let load_seq = self.working.next_seq();
        let row = TruckContainer {
            id,
            truck_id,
            container_id,
            date_loaded,
            load_seq,
        };
        self.working.truck_containers.insert(id, row.clone());
        Ok(row)
    }

    fn remove_ship_container(&mut self, id: ShipContainerId) -> Result<(), StoreError> {
        self.working.ship_containers.remove(&id);
        Ok(())
    }

    fn remove_truck_container(&mut self, id: TruckContainerId) -> Result<(), StoreError> {
        self.working.truck_containers.remove(&id);
        Ok(())
    }

    fn move_ship_container(
        &mut self,
        id: ShipContainerId,
        destination: ShipId,
    ) -> Result<(), StoreError> {
        if let Some(row) = self.working.ship_containers.get_mut(&id) {
            row.ship_id = destination;
        }
        Ok(())
    }

    fn move_truck_container(
        &mut self,
        id: TruckContainerId,
        destination: TruckId,
        date_loaded: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let seq = self.working.next_seq();
        if let Some(row) = self.working.truck_containers.get_mut(&id) {
            row.truck_id = destination;
            row.date_loaded = date_loaded;
            row.load_seq = seq;
        }
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        self.store.state = self.working.clone();
        self.store.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_empty_store() {
        let dir = tempdir().unwrap();
        let mut store = FleetStore::open(dir.path().to_path_buf()).unwrap();
        let tx = store.begin();
        assert!(tx.containers().unwrap().is_empty());
        assert!(tx.ships().unwrap().is_empty());
    }

    #[test]
    fn test_commit_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let ship_id;
        {
            let mut store = FleetStore::open(dir.path().to_path_buf()).unwrap();
            let mut tx = store.begin();
            ship_id = tx.insert_ship("Evergreen", 4).unwrap().id;
            tx.commit().unwrap();
        }

        let mut store = FleetStore::open(dir.path().to_path_buf()).unwrap();
        let tx = store.begin();
        let ship = tx.ship(ship_id).unwrap().unwrap();
        assert_eq!(ship.name, "Evergreen");
        assert_eq!(ship.maximum_capacity, 4);
    }

    #[test]
    fn test_dropped_transaction_discards_writes() {
        let dir = tempdir().unwrap();
        let mut store = FleetStore::open(dir.path().to_path_buf()).unwrap();
        {
            let mut tx = store.begin();
            tx.insert_container("Orphan").unwrap();
            // no commit
        }
        let tx = store.begin();
        assert!(tx.containers().unwrap().is_empty());
    }

    #[test]
    fn test_ids_stay_unique_across_reopen() {
        let dir = tempdir().unwrap();
        let first;
        {
            let mut store = FleetStore::open(dir.path().to_path_buf()).unwrap();
            let mut tx = store.begin();
            first = tx.insert_container("A").unwrap().id;
            tx.commit().unwrap();
        }
        let mut store = FleetStore::open(dir.path().to_path_buf()).unwrap();
        let mut tx = store.begin();
        let second = tx.insert_container("B").unwrap().id;
        assert_ne!(first, second);
    }

    #[test]
    fn test_listings_are_name_sorted() {
        let dir = tempdir().unwrap();
        let mut store = FleetStore::open(dir.path().to_path_buf()).unwrap();
        let mut tx = store.begin();
        tx.insert_truck("Zulu", 3).unwrap();
        tx.insert_truck("Alpha", 2).unwrap();
        let names: Vec<_> = tx.trucks().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Alpha", "Zulu"]);
    }

    #[test]
    fn test_removing_ship_cascades_placements() {
        let dir = tempdir().unwrap();
        let mut store = FleetStore::open(dir.path().to_path_buf()).unwrap();
        let mut tx = store.begin();
        let ship = tx.insert_ship("Carrier", 4).unwrap();
        let container = tx.insert_container("Box").unwrap();
        tx.insert_ship_container(ship.id, container.id).unwrap();

        tx.remove_ship(ship.id).unwrap();

        assert!(tx.ship_container_by_container(container.id).unwrap().is_none());
        assert_eq!(tx.count_ship_containers(ship.id).unwrap(), 0);
    }

    #[test]
    fn test_latest_is_decided_by_sequence_not_timestamp() {
        let dir = tempdir().unwrap();
        let mut store = FleetStore::open(dir.path().to_path_buf()).unwrap();
        let mut tx = store.begin();
        let truck = tx.insert_truck("Hauler", 3).unwrap();
        let first = tx.insert_container("First").unwrap();
        let second = tx.insert_container("Second").unwrap();

        // Identical wall-clock timestamps must not make "latest" ambiguous.
        let now = Utc::now();
        tx.insert_truck_container(truck.id, first.id, now).unwrap();
        tx.insert_truck_container(truck.id, second.id, now).unwrap();

        let latest = tx.latest_truck_container(truck.id).unwrap().unwrap();
        assert_eq!(latest.container_id, second.id);
    }

    #[test]
    fn test_move_truck_container_refreshes_sequence() {
        let dir = tempdir().unwrap();
        let mut store = FleetStore::open(dir.path().to_path_buf()).unwrap();
        let mut tx = store.begin();
        let source = tx.insert_truck("Source", 3).unwrap();
        let destination = tx.insert_truck("Destination", 3).unwrap();
        let a = tx.insert_container("A").unwrap();
        let b = tx.insert_container("B").unwrap();

        let row_a = tx.insert_truck_container(source.id, a.id, Utc::now()).unwrap();
        tx.insert_truck_container(destination.id, b.id, Utc::now()).unwrap();

        tx.move_truck_container(row_a.id, destination.id, Utc::now()).unwrap();

        let latest = tx.latest_truck_container(destination.id).unwrap().unwrap();
        assert_eq!(latest.container_id, a.id);
        assert_eq!(latest.truck_id, destination.id);
    }
}
