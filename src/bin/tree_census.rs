//! Interactive census explorer CLI
//!
//! ```bash
//! tree_census path/to/2015-street-tree-census.csv
//! tree_census census.csv --quit-word exit
//! tree_census census.csv --json
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tree_census::render::{Messages, OutputMode, Renderer};
use tree_census::session::Session;
use tree_census::{CensusData, ReportEngine};

/// Interactive species lookup over a street tree census CSV
#[derive(Parser)]
#[command(name = "tree_census")]
#[command(about = "Species lookup with borough popularity statistics")]
#[command(version)]
struct Cli {
    /// Path to the census CSV export
    path: PathBuf,

    /// Case-insensitive word that ends the session
    #[arg(long, default_value = "quit")]
    quit_word: String,

    /// Emit one JSON document per query instead of formatted text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tree_census=info")),
        )
        .init();

    let cli = Cli::parse();

    let data = CensusData::load(&cli.path)
        .with_context(|| format!("failed to load census from {}", cli.path.display()))?;
    let engine = ReportEngine::new(data);

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };
    let renderer = Renderer::new(Messages::with_quit_word(&cli.quit_word), mode);
    let session = Session::new(&engine, renderer, &cli.quit_word);

    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), stdout.lock())?;

    Ok(())
}
