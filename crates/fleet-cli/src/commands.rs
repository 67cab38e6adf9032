//! Command handlers

use fleet_app::config::Config;
use fleet_app::notify::LogNotifier;
use fleet_app::service::{containers, ship_containers, ships, truck_containers, trucks};
use fleet_store::FleetStore;
use fleet_types::Result;

use crate::cli::{Cli, Commands, ContainerCommands, ShipCommands, TruckCommands};
use crate::output;

/// No originating push connection exists for a CLI invocation, so no
/// client is excluded from the broadcast.
const NO_CONNECTION: &str = "";

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let format = cli.format.unwrap_or(config.output_format);
    let store_dir = cli.store_dir.clone().unwrap_or_else(|| config.store_dir());

    let mut store = FleetStore::open(store_dir)?;
    let mut tx = store.begin();
    let notifier = LogNotifier;

    match cli.command {
        Commands::Container { command } => match command {
            ContainerCommands::Create { name } => {
                let id = containers::create(&mut tx, &name)?;
                println!("Created container {id}");
            }
            ContainerCommands::Get { id } => {
                let container = containers::get(&tx, id)?;
                output::print_containers(format, std::slice::from_ref(&container))?;
            }
            ContainerCommands::List => {
                output::print_containers(format, &containers::list(&tx)?)?;
            }
            ContainerCommands::Delete { id } => {
                containers::delete(&mut tx, id)?;
                println!("Deleted container {id}");
            }
        },

        Commands::Ship { command } => match command {
            ShipCommands::Create { name, capacity } => {
                let id = ships::create(&mut tx, &name, capacity)?;
                println!("Created ship {id}");
            }
            ShipCommands::Get { id } => {
                let ship = ships::get(&tx, id)?;
                output::print_ships(format, std::slice::from_ref(&ship))?;
            }
            ShipCommands::List => {
                output::print_ships(format, &ships::list(&tx)?)?;
            }
            ShipCommands::Delete { id } => {
                ships::delete(&mut tx, id)?;
                println!("Deleted ship {id}");
            }
            ShipCommands::Load {
                ship_id,
                container_id,
            } => {
                ship_containers::load(&mut tx, &notifier, ship_id, container_id, NO_CONNECTION)?;
                println!("Loaded container {container_id} onto ship {ship_id}");
            }
            ShipCommands::Unload {
                ship_id,
                container_id,
            } => {
                ship_containers::unload(&mut tx, &notifier, ship_id, container_id, NO_CONNECTION)?;
                println!("Unloaded container {container_id} from ship {ship_id}");
            }
            ShipCommands::Transfer {
                source_id,
                destination_id,
                container_id,
            } => {
                ship_containers::transfer(
                    &mut tx,
                    &notifier,
                    source_id,
                    destination_id,
                    container_id,
                    NO_CONNECTION,
                )?;
                println!(
                    "Transferred container {container_id} from ship {source_id} to ship {destination_id}"
                );
            }
        },

        Commands::Truck { command } => match command {
            TruckCommands::Create { name, capacity } => {
                let id = trucks::create(&mut tx, &name, capacity)?;
                println!("Created truck {id}");
            }
            TruckCommands::Get { id } => {
                let truck = trucks::get(&tx, id)?;
                output::print_trucks(format, std::slice::from_ref(&truck))?;
            }
            TruckCommands::List => {
                output::print_trucks(format, &trucks::list(&tx)?)?;
            }
            TruckCommands::Delete { id } => {
                trucks::delete(&mut tx, id)?;
                println!("Deleted truck {id}");
            }
            TruckCommands::Load {
                truck_id,
                container_id,
            } => {
                truck_containers::load(&mut tx, truck_id, container_id)?;
                println!("Loaded container {container_id} onto truck {truck_id}");
            }
            TruckCommands::Unload {
                truck_id,
                container_id,
            } => {
                truck_containers::unload(&mut tx, truck_id, container_id)?;
                println!("Unloaded container {container_id} from truck {truck_id}");
            }
            TruckCommands::Transfer {
                source_id,
                destination_id,
                container_id,
            } => {
                truck_containers::transfer(&mut tx, source_id, destination_id, container_id)?;
                println!(
                    "Transferred container {container_id} from truck {source_id} to truck {destination_id}"
                );
            }
        },
    }

    Ok(())
}
