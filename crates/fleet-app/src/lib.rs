//! Application service layer
//!
//! The workflow services validate a request against the current store
//! state, mutate placement rows on success, commit, and (for ship
//! operations) broadcast a notification. Every validation failure is
//! detected before any mutation; a rejected request never changes state.

pub mod config;
pub mod notify;
pub mod service;

pub use config::Config;
pub use notify::{ContainerSummary, LogNotifier, NullNotifier, ShipEvent, ShipNotifier};
