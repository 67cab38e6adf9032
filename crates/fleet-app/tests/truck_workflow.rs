//! Truck loading/unloading/transfer workflow tests
//!
//! Trucks add stack discipline on top of the ship rules: only the most
//! recently loaded container may be unloaded or transferred.

use tempfile::tempdir;

use fleet_app::notify::NullNotifier;
use fleet_app::service::{containers, ship_containers, ships, truck_containers, trucks};
use fleet_domain::repository::EntityStore;
use fleet_store::FleetStore;
use fleet_types::DomainError;

fn open_store(dir: &tempfile::TempDir) -> FleetStore {
    FleetStore::open(dir.path().to_path_buf()).unwrap()
}

#[test]
fn test_load_fails_when_truck_missing() {
    let dir = tempdir().unwrap();
    let mut store = open_store(&dir);
    let mut tx = store.begin();
    let container = containers::create(&mut tx, "Box").unwrap();

    let result = truck_containers::load(&mut tx, 999, container);

    assert_eq!(result, Err(DomainError::TruckNotFound));
}

#[test]
fn test_load_fails_when_truck_full() {
    let dir = tempdir().unwrap();
    let mut store = open_store(&dir);
    let mut tx = store.begin();
    let truck = trucks::create(&mut tx, "Scania", 2).unwrap();
    for name in ["A", "B"] {
        let c = containers::create(&mut tx, name).unwrap();
        truck_containers::load(&mut tx, truck, c).unwrap();
    }
    let extra = containers::create(&mut tx, "C").unwrap();

    let result = truck_containers::load(&mut tx, truck, extra);

    assert_eq!(result, Err(DomainError::TruckIsFull));
    assert_eq!(tx.count_truck_containers(truck).unwrap(), 2);
}

#[test]
fn test_load_fails_when_container_missing() {
    let dir = tempdir().unwrap();
    let mut store = open_store(&dir);
    let mut tx = store.begin();
    let truck = trucks::create(&mut tx, "Scania", 2).unwrap();

    let result = truck_containers::load(&mut tx, truck, 999);

    assert_eq!(result, Err(DomainError::ContainerNotFound));
}

#[test]
fn test_load_fails_when_container_already_on_this_truck() {
    let dir = tempdir().unwrap();
    let mut store = open_store(&dir);
    let mut tx = store.begin();
    let truck = trucks::create(&mut tx, "Scania", 2).unwrap();
    let container = containers::create(&mut tx, "Box").unwrap();
    truck_containers::load(&mut tx, truck, container).unwrap();

    let result = truck_containers::load(&mut tx, truck, container);

    assert_eq!(result, Err(DomainError::AlreadyInDestinationTruck));
}

#[test]
fn test_load_fails_when_container_on_another_truck() {
    let dir = tempdir().unwrap();
    let mut store = open_store(&dir);
    let mut tx = store.begin();
    let first = trucks::create(&mut tx, "First", 2).unwrap();
    let second = trucks::create(&mut tx, "Second", 2).unwrap();
    let container = containers::create(&mut tx, "Box").unwrap();
    truck_containers::load(&mut tx, first, container).unwrap();

    let result = truck_containers::load(&mut tx, second, container);

    assert_eq!(result, Err(DomainError::LoadedInAnotherTruck));
}

#[test]
fn test_load_fails_when_container_on_a_ship() {
    let dir = tempdir().unwrap();
    let mut store = open_store(&dir);
    let mut tx = store.begin();
    let truck = trucks::create(&mut tx, "Scania", 2).unwrap();
    let ship = ships::create(&mut tx, "Maersk", 2).unwrap();
    let container = containers::create(&mut tx, "Box").unwrap();
    ship_containers::load(&mut tx, &NullNotifier, ship, container, "").unwrap();

    let result = truck_containers::load(&mut tx, truck, container);

    assert_eq!(result, Err(DomainError::ContainerLoadedInShip));
}

#[test]
fn test_load_creates_one_placement() {
    let dir = tempdir().unwrap();
    let mut store = open_store(&dir);
    let mut tx = store.begin();
    let truck = trucks::create(&mut tx, "Scania", 2).unwrap();
    let container = containers::create(&mut tx, "Box").unwrap();

    truck_containers::load(&mut tx, truck, container).unwrap();

    let row = tx.truck_container_by_container(container).unwrap().unwrap();
    assert_eq!(row.truck_id, truck);
    assert_eq!(row.container_id, container);
    assert_eq!(tx.count_truck_containers(truck).unwrap(), 1);
}

#[test]
fn test_unload_fails_when_container_not_loaded() {
    let dir = tempdir().unwrap();
    let mut store = open_store(&dir);
    let mut tx = store.begin();
    let truck = trucks::create(&mut tx, "Scania", 2).unwrap();
    let container = containers::create(&mut tx, "Box").unwrap();

    let result = truck_containers::unload(&mut tx, truck, container);

    assert_eq!(result, Err(DomainError::ContainerNotLoaded));
}

#[test]
fn test_unload_fails_when_container_on_another_truck() {
    let dir = tempdir().unwrap();
    let mut store = open_store(&dir);
    let mut tx = store.begin();
    let first = trucks::create(&mut tx, "First", 2).unwrap();
    let second = trucks::create(&mut tx, "Second", 2).unwrap();
    let container = containers::create(&mut tx, "Box").unwrap();
    truck_containers::load(&mut tx, first, container).unwrap();

    let result = truck_containers::unload(&mut tx, second, container);

    assert_eq!(result, Err(DomainError::LoadedInAnotherTruck));
}

#[test]
fn test_unload_follows_stack_order() {
    let dir = tempdir().unwrap();
    let mut store = open_store(&dir);
    let mut tx = store.begin();
    let truck = trucks::create(&mut tx, "Scania", 3).unwrap();
    let first = containers::create(&mut tx, "First").unwrap();
    let second = containers::create(&mut tx, "Second").unwrap();
    truck_containers::load(&mut tx, truck, first).unwrap();
    truck_containers::load(&mut tx, truck, second).unwrap();

    // The buried container is unreachable until the top one comes off.
    let buried = truck_containers::unload(&mut tx, truck, first);
    assert_eq!(buried, Err(DomainError::NotLatestLoaded));
    assert_eq!(tx.count_truck_containers(truck).unwrap(), 2);

    truck_containers::unload(&mut tx, truck, second).unwrap();
    truck_containers::unload(&mut tx, truck, first).unwrap();
    assert_eq!(tx.count_truck_containers(truck).unwrap(), 0);
}

#[test]
fn test_transfer_rejects_same_source_and_destination_before_any_lookup() {
    let dir = tempdir().unwrap();
    let mut store = open_store(&dir);
    let mut tx = store.begin();

    let result = truck_containers::transfer(&mut tx, 999, 999, 1);

    assert_eq!(result, Err(DomainError::SameSourceAndDestinationTruck));
}

#[test]
fn test_transfer_fails_when_source_missing() {
    let dir = tempdir().unwrap();
    let mut store = open_store(&dir);
    let mut tx = store.begin();
    let destination = trucks::create(&mut tx, "Destination", 2).unwrap();

    let result = truck_containers::transfer(&mut tx, 999, destination, 1);

    assert_eq!(result, Err(DomainError::SourceTruckNotFound));
}

#[test]
fn test_transfer_fails_when_destination_missing() {
    let dir = tempdir().unwrap();
    let mut store = open_store(&dir);
    let mut tx = store.begin();
    let source = trucks::create(&mut tx, "Source", 2).unwrap();

    let result = truck_containers::transfer(&mut tx, source, 999, 1);

    assert_eq!(result, Err(DomainError::DestinationTruckNotFound));
}

#[test]
fn test_transfer_fails_when_container_not_placed() {
    let dir = tempdir().unwrap();
    let mut store = open_store(&dir);
    let mut tx = store.begin();
    let source = trucks::create(&mut tx, "Source", 2).unwrap();
    let destination = trucks::create(&mut tx, "Destination", 2).unwrap();
    let container = containers::create(&mut tx, "Box").unwrap();

    let result = truck_containers::transfer(&mut tx, source, destination, container);

    assert_eq!(result, Err(DomainError::ContainerNotFound));
}

#[test]
fn test_transfer_fails_when_container_already_in_destination() {
    let dir = tempdir().unwrap();
    let mut store = open_store(&dir);
    let mut tx = store.begin();
    let source = trucks::create(&mut tx, "Source", 2).unwrap();
    let destination = trucks::create(&mut tx, "Destination", 2).unwrap();
    let container = containers::create(&mut tx, "Box").unwrap();
    truck_containers::load(&mut tx, destination, container).unwrap();

    let result = truck_containers::transfer(&mut tx, source, destination, container);

    assert_eq!(result, Err(DomainError::AlreadyInDestinationTruck));
}

#[test]
fn test_transfer_fails_when_container_not_in_source() {
    let dir = tempdir().unwrap();
    let mut store = open_store(&dir);
    let mut tx = store.begin();
    let source = trucks::create(&mut tx, "Source", 2).unwrap();
    let destination = trucks::create(&mut tx, "Destination", 2).unwrap();
    let elsewhere = trucks::create(&mut tx, "Elsewhere", 2).unwrap();
    let container = containers::create(&mut tx, "Box").unwrap();
    truck_containers::load(&mut tx, elsewhere, container).unwrap();

    let result = truck_containers::transfer(&mut tx, source, destination, container);

    assert_eq!(result, Err(DomainError::NotInSourceTruck));
}

#[test]
fn test_transfer_fails_when_destination_full() {
    let dir = tempdir().unwrap();
    let mut store = open_store(&dir);
    let mut tx = store.begin();
    let source = trucks::create(&mut tx, "Source", 2).unwrap();
    let destination = trucks::create(&mut tx, "Destination", 1).unwrap();
    let container = containers::create(&mut tx, "Box").unwrap();
    let filler = containers::create(&mut tx, "Filler").unwrap();
    truck_containers::load(&mut tx, source, container).unwrap();
    truck_containers::load(&mut tx, destination, filler).unwrap();

    let result = truck_containers::transfer(&mut tx, source, destination, container);

    assert_eq!(result, Err(DomainError::DestinationTruckIsFull));
}

#[test]
fn test_transfer_fails_when_container_is_buried() {
    let dir = tempdir().unwrap();
    let mut store = open_store(&dir);
    let mut tx = store.begin();
    let source = trucks::create(&mut tx, "Source", 3).unwrap();
    let destination = trucks::create(&mut tx, "Destination", 3).unwrap();
    let buried = containers::create(&mut tx, "Buried").unwrap();
    let top = containers::create(&mut tx, "Top").unwrap();
    truck_containers::load(&mut tx, source, buried).unwrap();
    truck_containers::load(&mut tx, source, top).unwrap();

    let result = truck_containers::transfer(&mut tx, source, destination, buried);

    assert_eq!(result, Err(DomainError::NotLatestLoaded));
    // The buried container stays on the source truck.
    let row = tx.truck_container_by_container(buried).unwrap().unwrap();
    assert_eq!(row.truck_id, source);
    assert_eq!(tx.count_truck_containers(destination).unwrap(), 0);
}

#[test]
fn test_transfer_moves_top_of_stack_onto_destination_stack() {
    let dir = tempdir().unwrap();
    let mut store = open_store(&dir);
    let mut tx = store.begin();
    let source = trucks::create(&mut tx, "Source", 3).unwrap();
    let destination = trucks::create(&mut tx, "Destination", 3).unwrap();
    let settled = containers::create(&mut tx, "Settled").unwrap();
    let moved = containers::create(&mut tx, "Moved").unwrap();
    truck_containers::load(&mut tx, destination, settled).unwrap();
    truck_containers::load(&mut tx, source, moved).unwrap();

    truck_containers::transfer(&mut tx, source, destination, moved).unwrap();

    let row = tx.truck_container_by_container(moved).unwrap().unwrap();
    assert_eq!(row.truck_id, destination);
    assert_eq!(tx.count_truck_containers(source).unwrap(), 0);
    assert_eq!(tx.count_truck_containers(destination).unwrap(), 2);

    // The transferred container lands on top of the destination stack.
    let latest = tx.latest_truck_container(destination).unwrap().unwrap();
    assert_eq!(latest.container_id, moved);
}
