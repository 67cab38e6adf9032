//! Domain layer: entity models, placement and capacity rules, and the
//! store trait the workflow services run against.

pub mod model;
pub mod repository;
pub mod service;

pub use model::{Carrier, Container, Ship, ShipContainer, Truck, TruckContainer};
pub use repository::EntityStore;
pub use service::{placement_of, validate_name, Placement};
