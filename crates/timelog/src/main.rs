use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use timelog_core::{default_sources, generate_report};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Reads `simplelog` and `testlog` from the working directory and prints
/// the average, fastest and slowest timing of each.
#[derive(Parser, Debug)]
#[command(author, version, about = "Timing log summary", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .init();

    let _cli = Cli::parse();

    let sources = default_sources();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    generate_report(&sources, &mut out).context("failed to summarize timing logs")?;

    info!(sources = sources.len(), "timing report written");
    Ok(())
}
