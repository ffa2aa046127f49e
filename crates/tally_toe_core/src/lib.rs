//! Tally Toe core - two-player tic-tac-toe with scores that persist
//!
//! Blue and Red take turns marking a 3x3 board. The [`GameEngine`] owns the
//! game state, decides wins and draws, and keeps a running score for each
//! player in an injected [`ScoreStore`]. Every state change is pushed to a
//! [`Presenter`] as a read-only [`GameState`].
//!
//! # Example
//!
//! ```
//! use tally_toe_core::{GameEngine, GameState, MemoryStore, Outcome};
//!
//! let mut engine = GameEngine::initialize(MemoryStore::new(), |state: &GameState| {
//!     println!("{}", state.status_line());
//! });
//!
//! for index in [0, 1, 3, 4, 6] {
//!     engine.cell_selected(index);
//! }
//! assert_eq!(engine.state().outcome(), Outcome::BlueWins);
//! assert_eq!(engine.state().scores().blue(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod position;
mod presenter;
pub mod rules;
mod store;
mod types;

pub use engine::{GameEngine, IgnoreReason, Selection};
pub use position::{Position, PositionError};
pub use presenter::Presenter;
pub use store::{BLUE_SCORE_KEY, MemoryStore, RED_SCORE_KEY, ScoreStore, load_score, parse_score};
pub use types::{Board, Cell, GameState, Outcome, Player, ScoreBoard};
