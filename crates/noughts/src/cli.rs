//! Command-line interface for noughts.

use crate::config::GameOverPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - noughts and crosses for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Noughts and crosses for two players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./noughts.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// What a cell input does once the game is over
    #[arg(long, value_enum, global = true)]
    pub on_game_over: Option<GameOverPolicy>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to run (defaults to play)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively on this terminal
    Play,

    /// Apply a sequence of board indices (0-8) and print the result
    Replay {
        /// Board indices in play order, X first
        #[arg(allow_negative_numbers = true)]
        moves: Vec<isize>,
    },
}
