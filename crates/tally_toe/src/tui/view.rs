//! View state shared between the engine's presenter and the draw loop.

use std::cell::RefCell;
use std::rc::Rc;

use tally_toe_core::{GameState, Position};
use tracing::debug;

/// What the terminal shows: the latest pushed state plus the cursor.
#[derive(Debug, Clone)]
pub struct TerminalView {
    state: GameState,
    cursor: Position,
}

impl TerminalView {
    /// Creates a view with the cursor in the center.
    pub fn new() -> Self {
        Self {
            state: GameState::default(),
            cursor: Position::Center,
        }
    }

    /// The last state pushed by the engine.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the cursor.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Presenter for the engine: stores each pushed snapshot in `view`.
    pub fn presenter(view: &Rc<RefCell<Self>>) -> impl FnMut(&GameState) + use<> {
        let view = Rc::clone(view);
        move |state: &GameState| {
            debug!(status = %state.status_line(), "View updated");
            view.borrow_mut().state = state.clone();
        }
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}
