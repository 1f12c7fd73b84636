#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the roster record feed.
//!
//! Fetches the requested number of records from a JSON feed endpoint
//! and prints them as tab-separated rows. Log verbosity is controlled
//! via `RUST_LOG`.

use clap::Parser;

#[derive(Parser)]
#[command(name = "roster_cli", about = "Fetch records from a JSON feed")]
struct Cli {
    /// Feed endpoint URL
    url: String,
    /// Number of records to fetch
    count: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    log::info!("Fetching {} records from {}", cli.count, cli.url);

    let rows = roster_feed::get_data(&cli.url, cli.count).await?;

    for row in &rows {
        println!("{}", row.join("\t"));
    }

    log::info!("Done ({} rows)", rows.len());

    Ok(())
}
