//! Tally Toe - Blue vs Red tic-tac-toe with persistent scores.

use anyhow::{Context, Result};
use clap::Parser;
use tally_toe::{
    AppConfig, Cli, Command, SqliteScoreStore, init_file, init_stderr, print_report,
    print_scores, replay, replay_detached, tui,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref(), cli.db_path.clone())?;
    let command = cli.command();

    if command == Command::Play {
        init_file(config.log_file(), config.log_filter())?;
    } else {
        init_stderr(config.log_filter());
    }
    info!(?command, db_path = %config.db_path(), "Starting tally_toe");

    let mut store = SqliteScoreStore::open(config.db_path())
        .with_context(|| format!("Failed to open score database {}", config.db_path()))?;

    match command {
        Command::Play => tui::run(store),
        Command::Scores { json } => print_scores(&mut store, json, &mut std::io::stdout().lock()),
        Command::Replay {
            moves,
            json,
            no_persist,
        } => {
            let report = if no_persist {
                replay_detached(&mut store, &moves)
            } else {
                replay(store, &moves)
            };
            print_report(&report, json, &mut std::io::stdout().lock())
        }
    }
}
