//! Presenter seam: receives a snapshot after every state change.

use crate::GameState;

/// Consumes game state snapshots for rendering.
///
/// Called after `initialize`, every accepted move, and every `reset`.
/// Rejected moves never reach the presenter.
pub trait Presenter {
    /// Renders (or records) the given state.
    fn present(&mut self, state: &GameState);
}

impl<F> Presenter for F
where
    F: FnMut(&GameState),
{
    fn present(&mut self, state: &GameState) {
        self(state)
    }
}
