use clap::{Parser, Subcommand};

/// CLI arguments for citydb-cli
#[derive(Debug, Parser)]
#[command(
    name = "citydb",
    version,
    about = "CLI for searching the city gazetteer, measuring distances and comparing routes"
)]
pub struct CliArgs {
    /// Path to a dataset (.json, .json.gz or .bin snapshot). Defaults to the embedded data.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// How to resolve duplicate city ids: reject, keep_first, keep_last, keep_most_populous
    #[arg(long = "duplicates", global = true, default_value = "keep_most_populous")]
    pub duplicates: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the gazetteer
    Stats,

    /// Fuzzy-search cities by name, alias, state or district
    Search {
        query: String,
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
        /// Show the score next to each hit
        #[arg(long)]
        scores: bool,
    },

    /// Show one city by id
    City { id: String },

    /// List cities in a state
    State { name: String },

    /// List cities in a region (North, South, East, West, Central, Northeast)
    Region { name: String },

    /// List cities of a tier (1-4)
    Tier { tier: u8 },

    /// Most significant cities: tier first, then population
    Popular {
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Cities sharing a state or region with the given city
    Related {
        id: String,
        #[arg(short, long, default_value_t = 5)]
        limit: usize,
    },

    /// Geographically closest cities
    Nearest {
        id: String,
        #[arg(short, long, default_value_t = 5)]
        limit: usize,
    },

    /// Great-circle distance between two cities in km
    Distance { from: String, to: String },

    /// Ranked matches plus keyword-driven categories
    Suggest { query: String },

    /// Per-mode travel estimates between two cities
    Routes { from: String, to: String },

    /// Write a bincode snapshot of the loaded gazetteer
    Snapshot { output: String },
}
