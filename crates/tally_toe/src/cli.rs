//! Command-line interface for tally_toe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tally Toe - Blue vs Red tic-tac-toe with scores that stick around
#[derive(Parser, Debug)]
#[command(name = "tally_toe")]
#[command(about = "Two-player tic-tac-toe with persistent scores", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tally_toe.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Score database path, overriding config and environment
    #[arg(long, global = true)]
    pub db_path: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Print the stored scores
    Scores {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply cell indices (0-8) in order and print the result
    Replay {
        /// Cell indices, Blue moves first
        #[arg(required = true)]
        moves: Vec<usize>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,

        /// Do not write score changes to the database
        #[arg(long)]
        no_persist: bool,
    },
}

impl Cli {
    /// The command to run, `play` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}
