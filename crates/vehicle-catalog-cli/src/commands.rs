//! Command handlers

use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, warn};
use vehicle_catalog_domain::{sample_fleet, write_catalog, AnyVehicle, Car, Truck};
use vehicle_catalog_types::Result;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::logging::init_logging;

/// What a parsed command asks for
#[derive(Debug, PartialEq)]
enum Action {
    /// Print these vehicles, in order
    Render(Vec<AnyVehicle>),
    Config { show: bool, init: bool },
}

impl From<Commands> for Action {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Show => Action::Render(sample_fleet()),
            Commands::Car {
                make,
                model,
                seats,
                fuel,
            } => Action::Render(vec![Car::new(make, model, seats, fuel).into()]),
            Commands::Truck {
                make,
                model,
                payload,
                wheels,
            } => Action::Render(vec![Truck::new(make, model, payload, wheels).into()]),
            Commands::Config { show, init } => Action::Config { show, init },
        }
    }
}

/// Execute the parsed command line
pub fn execute(cli: Cli) -> Result<()> {
    let loaded = Config::load();
    let log_level = match &loaded {
        Ok(config) => config.log_level.clone(),
        Err(_) => Config::default().log_level,
    };
    init_logging(cli.verbose, &log_level);

    let command = cli.command.unwrap_or(Commands::Show);
    debug!(?command, "dispatching");

    match Action::from(command) {
        Action::Config { show, init } => {
            let config = loaded?;
            let path = Config::config_path()?;
            let stdout = io::stdout();
            handle_config(&config, &path, show, init, &mut stdout.lock())
        }
        Action::Render(vehicles) => {
            // Config only tunes logging, so a broken file must not block output
            config_or_default(loaded);
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_catalog(&mut out, &vehicles)
        }
    }
}

/// Fall back to the default configuration when loading failed
fn config_or_default(loaded: Result<Config>) -> Config {
    loaded.unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable configuration, using defaults");
        Config::default()
    })
}

fn handle_config<W: Write>(
    config: &Config,
    path: &Path,
    show: bool,
    init: bool,
    out: &mut W,
) -> Result<()> {
    if init {
        if path.exists() {
            writeln!(out, "Configuration already exists: {}", path.display())?;
        } else {
            Config::default().save_to(path)?;
            info!(path = %path.display(), "configuration written");
            writeln!(out, "Configuration written to {}", path.display())?;
        }
    }

    if show || !init {
        writeln!(out, "Config file: {}", path.display())?;
        writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
    }

    out.flush()?;
    Ok(())
}
