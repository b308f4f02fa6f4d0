//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use cricket_dash::{
    cli::{Commands, CricketDash},
    commands::{
        dashboard::handle_dashboard,
        summary::{handle_summary, SummaryParams},
    },
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
fn main() -> Result<()> {
    // Silent unless RUST_LOG is set, so the dashboard screen stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let app = CricketDash::parse();

    match app.command {
        Commands::Dash { data_dir } => handle_dashboard(data_dir)?,

        Commands::Summary {
            data_dir,
            batsman,
            from,
            to,
            style,
            json,
            verbose,
        } => handle_summary(SummaryParams {
            data_dir,
            batsman,
            from,
            to,
            style,
            as_json: json,
            verbose,
        })?,
    }

    Ok(())
}
