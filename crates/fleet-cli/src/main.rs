//! Fleet Manager - track containers, ships and trucks
//!
//! A CLI front end over the fleet workflow services. Exit codes follow
//! the error kind: 1 validation, 2 not found, 3 server.

mod cli;
mod commands;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use fleet_types::ErrorKind;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {e}");
        let code = match e.kind() {
            ErrorKind::Validation => 1,
            ErrorKind::NotFound => 2,
            ErrorKind::Server => 3,
        };
        std::process::exit(code);
    }
}
