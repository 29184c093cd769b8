//! Vehicle Catalog - prints formatted details for cars and trucks
//!
//! Without a subcommand the sample catalog is printed.

mod cli;
mod commands;
mod config;
mod logging;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
