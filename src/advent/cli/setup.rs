use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "advent", bin_name = "advent", version)]
#[command(about = "A day-by-day advent calendar journal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every day of the calendar
    #[command(alias = "ls")]
    List,

    /// Show one day in full
    View {
        /// Day number
        day: String,
    },

    /// Edit fields of one day
    Set {
        /// Day number
        day: String,

        #[arg(long)]
        title: Option<String>,

        /// Rating from 1 to 10; anything unparsable clears it
        #[arg(long, allow_hyphen_values = true)]
        rating: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long)]
        service: Option<String>,
    },

    /// Empty one day
    Clear {
        /// Day number
        day: String,
    },

    /// Empty every day, keeping the day count
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Change the number of days (1-31)
    Resize {
        days: u32,
    },

    /// Merge days from a JSON, CSV or share-code file (`-` reads stdin)
    Import {
        source: String,

        /// json, csv or share (default: guessed from the extension, json for stdin)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Write the calendar as JSON, CSV or a tar.gz archive
    Export {
        /// json, csv or archive
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a share code for the calendar
    Share,

    /// Summary of the calendar and where it is stored
    Status,

    /// Get or set configuration values
    Config {
        key: Option<String>,
        value: Option<String>,
    },
}
