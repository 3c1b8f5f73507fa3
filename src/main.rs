//! Launch Records Dashboard CLI
//!
//! Loads the launch dataset, precomputes aggregates, and serves the
//! interactive dashboard over HTTP.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use launch_records_dashboard::aggregator::build_aggregates;
use launch_records_dashboard::dataset::load_records;
use launch_records_dashboard::server;
use launch_records_dashboard::utils::config::{DEFAULT_DATA_PATH, DEFAULT_PORT};

/// Launch Records Dashboard - per-site success charts and payload correlation
#[derive(Parser, Debug)]
#[command(name = "launch-dash")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the launch records CSV
    #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Port for the dashboard server
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Load the dataset and build the startup context. Any failure
    // here is fatal: the dashboard does not serve without data.
    let records = load_records(&cli.data)?;
    let aggregates = build_aggregates(&records)?;
    info!(
        "{} records across {} sites, {} total successes",
        records.len(),
        aggregates.sites.len(),
        aggregates.total_successes
    );

    // Serve until killed
    server::serve(records, aggregates, cli.port).await
}
