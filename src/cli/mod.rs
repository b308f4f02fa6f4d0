//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{BowlingStyle, Year};

#[derive(Debug, Parser)]
#[clap(name = "cricket-dash", about = "Cricket batting analytics dashboard")]
pub struct CricketDash {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the interactive terminal dashboard.
    ///
    /// Loads the five CSV tables once and re-renders the KPIs, charts, and
    /// raw table on every selection change.
    Dash {
        /// Directory containing the CSV tables (or set `CRICKET_DASH_DATA_DIR`).
        #[clap(long, short)]
        data_dir: Option<PathBuf>,
    },

    /// Print KPIs and filtered rows for one selection, without the dashboard.
    Summary {
        /// Directory containing the CSV tables (or set `CRICKET_DASH_DATA_DIR`).
        #[clap(long, short)]
        data_dir: Option<PathBuf>,

        /// Batsman name, matched exactly against the `batter` column.
        #[clap(long, short)]
        batsman: String,

        /// Lower year bound (defaults to the earliest year in the data).
        #[clap(long)]
        from: Option<Year>,

        /// Upper year bound (defaults to the latest year in the data).
        #[clap(long)]
        to: Option<Year>,

        /// Bowling style for the per-style breakdown (omit to skip it).
        #[clap(long, short)]
        style: Option<BowlingStyle>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Print where the tables were loaded from.
        #[clap(long)]
        verbose: bool,
    },
}
