//! eppo-report CLI - CSV reports of Eppo experiments
//!
//! This CLI provides:
//! - A team report of experiments owned by one team
//! - A status report of experiments that are ready or wrapping up
//!
//! Configuration comes from `EPPO_API_KEY`, `EPPO_BASE_URL` and `TEAM_ID`.
//! Diagnostics go to stderr and are filtered with `RUST_LOG`.

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "eppo-report")]
#[command(version, about = "CSV reports of Eppo experiments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Experiments owned by one team
    Team(eppo_report::cli::commands::team::TeamArgs),

    /// Experiments in the ready or wrap_up state
    Status(eppo_report::cli::commands::status::StatusArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Team(args) => eppo_report::cli::commands::team::execute(args),
        Commands::Status(args) => eppo_report::cli::commands::status::execute(args),
    }
}
