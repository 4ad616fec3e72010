use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "rental-form-kit")]
#[command(about = "Rental form helpers: currency, dates, day counts and date-range binding")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pin today's date (YYYY-MM-DD), overriding the config file
    #[arg(long)]
    pub today: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Format an amount as US dollars
    Currency {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Format a date as "Jan 5, 2024"
    Date { date: String },
    /// Count rental days between two dates, both included
    Days { start: String, end: String },
    /// Price a rental from its dates and daily rate
    Quote {
        start: String,
        end: String,
        daily_rate: f64,
    },
    /// Load a page fixture, bind its date inputs, replay its change events
    /// and print the resulting page as JSON
    Simulate {
        #[arg(short, long)]
        page: PathBuf,
    },
}
