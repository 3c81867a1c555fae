/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::path::PathBuf;

use anyhow::{Context, Result};
use authlist_processor::{
    io::{load_database, load_tiers},
    Processor,
};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Generate LaTeX author, affiliation and acknowledgement blocks.
///
/// Prints the author block, a blank line, then the acknowledgement block.
/// Set RUST_LOG (e.g. RUST_LOG=debug) for diagnostics on stderr.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the author database (JSON, or YAML with a .yaml/.yml extension)
    #[arg(index = 1)]
    database: PathBuf,

    /// Path to the tier file: one tier per line, comma separated author ids
    #[arg(index = 2)]
    tiers: PathBuf,
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    let database = load_database(&cli.database)
        .with_context(|| format!("loading database {}", cli.database.display()))?;
    let tiers = load_tiers(&cli.tiers)
        .with_context(|| format!("loading tiers {}", cli.tiers.display()))?;

    debug!(
        authors = database.authors.len(),
        tiers = tiers.len(),
        "inputs loaded"
    );

    let processor = Processor::new(database, tiers);
    let output = processor.render()?;
    print!("{}", output);
    Ok(())
}
