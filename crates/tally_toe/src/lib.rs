//! Tally Toe - terminal shell around [`tally_toe_core`]
//!
//! Supplies the collaborators the core engine leaves open: an SQLite
//! score store, a terminal presenter, configuration, and the commands the
//! `tally_toe` binary runs.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod db;
mod logging;
pub mod tui;

pub use cli::{Cli, Command};
pub use commands::{
    ReplayReport, print_report, print_scores, read_scores, replay, replay_detached,
};
pub use config::{AppConfig, ConfigError, DB_PATH_ENV, DEFAULT_CONFIG_FILE};
pub use db::{DbError, NewScoreEntry, ScoreEntry, SqliteScoreStore};
pub use logging::{init_file, init_stderr};
