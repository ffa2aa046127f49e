//! Game engine: owns the game state and drives every transition.

use tracing::{debug, info, instrument, warn};

use crate::rules;
use crate::store::load_score;
use crate::{
    BLUE_SCORE_KEY, GameState, Outcome, Player, Position, Presenter, RED_SCORE_KEY, ScoreBoard,
    ScoreStore,
};

/// Why a selection was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IgnoreReason {
    /// The index is not on the board.
    #[display("index {} is out of range", _0)]
    OutOfRange(usize),
    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
    /// The game is already won or drawn.
    #[display("game is already decided")]
    GameOver,
}

/// Result of a `cell_selected` call.
///
/// Ignored selections change nothing and notify nobody; this value only
/// lets the caller find out which case applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    /// The mark was placed; carries the outcome after evaluation.
    Accepted(Outcome),
    /// The selection was ignored.
    Ignored(IgnoreReason),
}

impl Selection {
    /// Returns true if the mark was placed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Selection::Accepted(_))
    }
}

/// Tic-tac-toe engine with persistent Blue/Red scores.
///
/// The engine exclusively owns the [`GameState`]. The store only sees
/// score strings and the presenter only sees shared snapshots.
#[derive(Debug, Clone)]
pub struct GameEngine<S, P> {
    state: GameState,
    store: S,
    presenter: P,
}

impl<S, P> GameEngine<S, P>
where
    S: ScoreStore,
    P: Presenter,
{
    /// Starts a session: empty board, Blue to move, scores read from `store`.
    ///
    /// Missing or unreadable scores start at 0. The initial state is
    /// pushed to the presenter before returning.
    #[instrument(skip_all)]
    pub fn initialize(mut store: S, presenter: P) -> Self {
        let scores = ScoreBoard::new(
            load_score(&mut store, BLUE_SCORE_KEY),
            load_score(&mut store, RED_SCORE_KEY),
        );
        info!(blue = scores.blue(), red = scores.red(), "Game engine initialized");

        let mut engine = Self {
            state: GameState::new(scores),
            store,
            presenter,
        };
        engine.publish();
        engine
    }

    /// Handles a click on the cell at `index` (0-8).
    ///
    /// Ignored when the index is off the board, the cell is taken, or the
    /// game is already decided. Otherwise places the current player's mark,
    /// evaluates the board once, records a win in the store, flips the turn
    /// if play continues, and pushes the new state.
    #[instrument(skip(self), fields(player = %self.state.turn()))]
    pub fn cell_selected(&mut self, index: usize) -> Selection {
        let Some(pos) = Position::from_index(index) else {
            return self.ignore(IgnoreReason::OutOfRange(index));
        };
        if self.state.outcome().is_decided() {
            return self.ignore(IgnoreReason::GameOver);
        }
        if !self.state.board().is_empty(pos) {
            return self.ignore(IgnoreReason::Occupied(pos));
        }

        let player = self.state.turn();
        self.state.board_mut().set(pos, player.into());

        let outcome = rules::evaluate(self.state.board());
        self.state.set_outcome(outcome);
        match outcome.winner() {
            Some(winner) => self.record_win(winner),
            None if outcome == Outcome::InProgress => self.state.set_turn(player.opponent()),
            None => info!("Game ended in a draw"),
        }

        debug!(position = %pos, ?outcome, "Move accepted");
        self.publish();
        Selection::Accepted(outcome)
    }

    /// Typed form of [`cell_selected`](Self::cell_selected).
    pub fn select(&mut self, pos: Position) -> Selection {
        self.cell_selected(pos.to_index())
    }

    /// Starts a new game. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state.clear();
        debug!("Game reset");
        self.publish();
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns an owned copy of the current state.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Ends the session, handing back the collaborators.
    pub fn into_parts(self) -> (S, P) {
        (self.store, self.presenter)
    }

    fn ignore(&self, reason: IgnoreReason) -> Selection {
        debug!(%reason, "Selection ignored");
        Selection::Ignored(reason)
    }

    fn record_win(&mut self, winner: Player) {
        let score = self.state.scores_mut().increment(winner);
        info!(%winner, score, "Game won");
        if let Err(e) = self.store.set(winner.score_key(), &score.to_string()) {
            warn!(key = winner.score_key(), error = %e, "Failed to persist score");
        }
    }

    fn publish(&mut self) {
        self.presenter.present(&self.state);
    }
}
