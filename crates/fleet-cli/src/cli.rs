//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fleet_types::OutputFormat;

#[derive(Parser)]
#[command(name = "fleet-manager")]
#[command(version)]
#[command(about = "Track containers, ships and trucks and the cargo moving between them")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Store directory override
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage containers
    Container {
        #[command(subcommand)]
        command: ContainerCommands,
    },

    /// Manage ships and their cargo
    Ship {
        #[command(subcommand)]
        command: ShipCommands,
    },

    /// Manage trucks and their cargo
    Truck {
        #[command(subcommand)]
        command: TruckCommands,
    },
}

#[derive(Subcommand)]
pub enum ContainerCommands {
    /// Create a container
    Create {
        /// Unique container name
        name: String,
    },

    /// Show a container
    Get { id: u64 },

    /// List all containers
    List,

    /// Delete a container (must be unplaced)
    Delete { id: u64 },
}

#[derive(Subcommand)]
pub enum ShipCommands {
    /// Create a ship
    Create {
        /// Unique ship name
        name: String,

        /// Maximum number of containers (1-4)
        capacity: u32,
    },

    /// Show a ship
    Get { id: u64 },

    /// List all ships
    List,

    /// Delete a ship; its containers become unplaced
    Delete { id: u64 },

    /// Load a container onto a ship
    Load { ship_id: u64, container_id: u64 },

    /// Unload a container from a ship
    Unload { ship_id: u64, container_id: u64 },

    /// Move a container from one ship to another
    Transfer {
        source_id: u64,
        destination_id: u64,
        container_id: u64,
    },
}

#[derive(Subcommand)]
pub enum TruckCommands {
    /// Create a truck
    Create {
        /// Unique truck name
        name: String,

        /// Maximum number of containers (1-3)
        capacity: u32,
    },

    /// Show a truck
    Get { id: u64 },

    /// List all trucks
    List,

    /// Delete a truck; its containers become unplaced
    Delete { id: u64 },

    /// Load a container onto a truck
    Load { truck_id: u64, container_id: u64 },

    /// Unload a container from a truck (latest loaded only)
    Unload { truck_id: u64, container_id: u64 },

    /// Move a container from one truck to another (latest loaded only)
    Transfer {
        source_id: u64,
        destination_id: u64,
        container_id: u64,
    },
}
