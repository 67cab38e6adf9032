//! Core types for fleet management

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Identifier of a container.
pub type ContainerId = u64;

/// Identifier of a ship.
pub type ShipId = u64;

/// Identifier of a truck.
pub type TruckId = u64;

/// Identifier of a ship-container placement row.
pub type ShipContainerId = u64;

/// Identifier of a truck-container placement row.
pub type TruckContainerId = u64;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
