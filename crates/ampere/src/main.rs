//! Ampere CLI - Scaffold hybrid desktop applications
//!
//! This is the main entry point for the Ampere command-line interface.

mod cli;
mod commands;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.debug);

    // Run command
    match cli.command {
        Commands::Create(args) => commands::create::run(args, cli.debug).await,
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        // Default to warnings only so the spinner owns the terminal;
        // AMPERE_LOG overrides for targeted debugging
        EnvFilter::try_from_env("AMPERE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
