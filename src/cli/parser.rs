use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for infloor
#[derive(Parser)]
#[command(
    name = "infloor",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rebuild badge entrance/exit logs into daily login, in-floor and break time",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom stores)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Enable debug diagnostics on stderr (otherwise RUST_LOG applies)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the store and the configuration file
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Print the internal run log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Load raw badge events from a CSV file into the store's input table
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Discard the rows already in the input table")]
        replace: bool,
    },

    /// Build the daily in-floor report
    Report {
        #[arg(
            long,
            value_name = "CSV",
            help = "Read raw events from a CSV file instead of the store"
        )]
        input: Option<String>,

        #[arg(long, value_enum, default_value = "db")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (csv, json, xlsx)")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing output file")]
        force: bool,
    },
}
