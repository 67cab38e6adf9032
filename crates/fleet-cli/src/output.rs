//! Output formatting module

use serde::Serialize;

use fleet_domain::model::{Container, Ship, Truck};
use fleet_types::{OutputFormat, Result, StoreError};

pub fn print_containers(format: OutputFormat, rows: &[Container]) -> Result<()> {
    if format == OutputFormat::Json {
        print_json(rows)?;
        return Ok(());
    }

    println!("{:>6}  NAME", "ID");
    for row in rows {
        println!("{:>6}  {}", row.id, row.name);
    }

    Ok(())
}

pub fn print_ships(format: OutputFormat, rows: &[Ship]) -> Result<()> {
    if format == OutputFormat::Json {
        print_json(rows)?;
        return Ok(());
    }

    println!("{:>6}  {:>8}  NAME", "ID", "CAPACITY");
    for row in rows {
        println!("{:>6}  {:>8}  {}", row.id, row.maximum_capacity, row.name);
    }

    Ok(())
}

pub fn print_trucks(format: OutputFormat, rows: &[Truck]) -> Result<()> {
    if format == OutputFormat::Json {
        print_json(rows)?;
        return Ok(());
    }

    println!("{:>6}  {:>8}  NAME", "ID", "CAPACITY");
    for row in rows {
        println!("{:>6}  {:>8}  {}", row.id, row.maximum_capacity, row.name);
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value).map_err(StoreError::from)?;
    println!("{content}");
    Ok(())
}
