//! Noughts - terminal front end
//!
//! Two players share one terminal and take turns entering cells.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod render;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::ConsoleConfig;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = ConsoleConfig::resolve(&cli)?;
    debug!(?config, "Resolved configuration");

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            info!("Starting noughts");
            session::play(&config, io::stdin().lock(), io::stdout().lock())
        }
        Command::Replay { moves } => session::replay(&config, &moves, io::stdout().lock()),
    }
}
