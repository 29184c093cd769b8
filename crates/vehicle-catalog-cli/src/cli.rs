//! CLI definition using clap

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vehicle-catalog")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Print formatted details for cars and trucks")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Print the sample catalog (default)
    Show,

    /// Print details for a single car
    Car {
        /// Manufacturer (e.g., "Toyota")
        make: String,

        /// Model name (e.g., "Corolla")
        model: String,

        /// Number of passenger seats
        #[arg(long, short = 's')]
        seats: u32,

        /// Fuel type (e.g., "Petrol", "Diesel")
        #[arg(long, short = 'f')]
        fuel: String,
    },

    /// Print details for a single truck
    Truck {
        /// Manufacturer (e.g., "Volvo")
        make: String,

        /// Model name (e.g., "FH16")
        model: String,

        /// Payload capacity in tons
        #[arg(long, short = 'p')]
        payload: f64,

        /// Number of wheels
        #[arg(long, short = 'w')]
        wheels: u32,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Write the default configuration file
        #[arg(long)]
        init: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["vehicle-catalog"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_car() {
        let cli = Cli::try_parse_from([
            "vehicle-catalog", "car", "Toyota", "Corolla", "--seats", "5", "--fuel", "Petrol",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Car {
                make: "Toyota".to_string(),
                model: "Corolla".to_string(),
                seats: 5,
                fuel: "Petrol".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_truck_with_global_verbose() {
        let cli = Cli::try_parse_from([
            "vehicle-catalog", "truck", "Volvo", "FH16", "-p", "18", "-w", "6", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Truck { payload, wheels, .. }) => {
                assert!((payload - 18.0).abs() < f64::EPSILON);
                assert_eq!(wheels, 6);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_negative_seats_rejected() {
        let result = Cli::try_parse_from([
            "vehicle-catalog", "car", "Toyota", "Corolla", "--seats", "-1", "--fuel", "Petrol",
        ]);
        assert!(result.is_err());
    }
}
