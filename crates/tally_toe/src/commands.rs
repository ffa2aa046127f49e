//! Non-interactive commands: printing scores and replaying moves.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use tally_toe_core::{
    BLUE_SCORE_KEY, GameEngine, GameState, MemoryStore, RED_SCORE_KEY, ScoreBoard, ScoreStore,
    Selection, load_score,
};
use tracing::{info, instrument, warn};

/// Reads both scores from the store.
#[instrument(skip(store))]
pub fn read_scores<S: ScoreStore>(store: &mut S) -> ScoreBoard {
    ScoreBoard::new(
        load_score(store, BLUE_SCORE_KEY),
        load_score(store, RED_SCORE_KEY),
    )
}

/// Writes the score lines (or JSON) to `out`.
#[instrument(skip(store, out))]
pub fn print_scores<S: ScoreStore>(store: &mut S, json: bool, out: &mut impl Write) -> Result<()> {
    let scores = read_scores(store);
    if json {
        serde_json::to_writer(&mut *out, &scores).context("Failed to encode scores")?;
        writeln!(out)?;
    } else {
        writeln!(out, "Blue Score: {}", scores.blue())?;
        writeln!(out, "Red Score: {}", scores.red())?;
    }
    Ok(())
}

/// Result of replaying a move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// State after the last move.
    pub state: GameState,
    /// Indices that were ignored, in order.
    pub ignored: Vec<usize>,
}

/// Applies `moves` to a fresh engine over `store`.
///
/// Ignored moves are collected rather than treated as errors.
#[instrument(skip(store))]
pub fn replay<S: ScoreStore>(store: S, moves: &[usize]) -> ReplayReport {
    let mut engine = GameEngine::initialize(store, |_: &GameState| {});
    let mut ignored = Vec::new();
    for &index in moves {
        if let Selection::Ignored(reason) = engine.cell_selected(index) {
            warn!(index, %reason, "Move ignored");
            ignored.push(index);
        }
    }
    let state = engine.snapshot();
    info!(outcome = ?state.outcome(), ignored = ignored.len(), "Replay finished");
    ReplayReport { state, ignored }
}

/// Replays without touching the real store: scores are copied into memory.
#[instrument(skip(store))]
pub fn replay_detached<S: ScoreStore>(store: &mut S, moves: &[usize]) -> ReplayReport {
    let scores = read_scores(store);
    let scratch = MemoryStore::with_entries([
        (BLUE_SCORE_KEY, scores.blue().to_string()),
        (RED_SCORE_KEY, scores.red().to_string()),
    ]);
    replay(scratch, moves)
}

/// Writes a replay report as text (or JSON) to `out`.
pub fn print_report(report: &ReplayReport, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report).context("Failed to encode replay")?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", report.state.board())?;
    writeln!(out)?;
    writeln!(out, "{}", report.state.status_line())?;
    writeln!(out, "Blue Score: {}", report.state.scores().blue())?;
    writeln!(out, "Red Score: {}", report.state.scores().red())?;
    if !report.ignored.is_empty() {
        let ignored: Vec<String> = report.ignored.iter().map(ToString::to_string).collect();
        writeln!(out, "Ignored moves: {}", ignored.join(", "))?;
    }
    Ok(())
}
