//! Command line interface.

pub mod command;
pub mod prompt;

use std::time::Duration;

use clap::{command, Parser, Subcommand};
use indicatif::ProgressBar;

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Contains the commands
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a citizen in the assistance registry
    Register {},
    /// File a flood report
    Report {},
    /// Check the same-day flood alert level for a CEP
    Alert {
        /// Postal code, 8 digits
        cep: String,
    },
    /// Chart the 7-day precipitation forecast for a CEP
    Forecast {
        /// Postal code, 8 digits
        cep: String,
    },
    /// Aggregate one month of daily precipitation into weekly sums
    Monthly {
        /// Postal code, 8 digits
        cep: String,
        /// Year of the analysis, e.g. 2023
        #[arg(long)]
        year: i32,
        /// Month of the analysis, 1-12
        #[arg(long)]
        month: u32,
    },
    /// Aggregate one year of daily precipitation into monthly sums
    Annual {
        /// Postal code, 8 digits
        cep: String,
        /// Year of the analysis, e.g. 2023
        #[arg(long)]
        year: i32,
    },
    /// Print the contents of the local stores
    Show {},
}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}
