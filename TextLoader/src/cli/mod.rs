//! TextLoader CLI - inspect translation files the way the shim sees them

pub mod commands;

use std::path::PathBuf;

use clap::Parser;
use commands::Commands;
use tracing::Level;

use crate::config::{CONFIG_FILE_NAME, LoaderConfig};

#[derive(Parser)]
#[command(name = "textloader")]
#[command(about = "TextLoader: inspect .tr translation tables", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./textloader.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Run the TextLoader CLI
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => LoaderConfig::load(path)?,
        None => LoaderConfig::load_or_default(CONFIG_FILE_NAME),
    };
    cli.command.execute(&config)?;

    Ok(())
}
