//! Dossier - resilient acquisition of photo-and-attributes records.
//!
//! Pulls one record at a time from a public notice registry or a
//! professional-profile web search, falling back to generated people and
//! finally to an embedded offline table, and prints it as JSON.

pub mod acquisition;
pub mod cli;
pub mod config;
pub mod error;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging; stdout is reserved for records
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("dossier=info".parse()?))
        .init();

    cli::run_command(&args)
}
