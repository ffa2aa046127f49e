//! Keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tally_toe_core::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to a new cell.
    MoveCursor(Position),
    /// Select the cell at the given position.
    Select(Position),
    /// Start a new game.
    Reset,
    /// Leave the app.
    Quit,
    /// Nothing to do.
    None,
}

/// Moves cursor based on arrow keys. Stops at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).and_then(|r| Position::at(r, col)),
        KeyCode::Down => Position::at(row + 1, col),
        KeyCode::Left => col.checked_sub(1).and_then(|c| Position::at(row, c)),
        KeyCode::Right => Position::at(row, col + 1),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// Maps a key event to an action given the current cursor.
pub fn action_for(event: KeyEvent, cursor: Position) -> Action {
    if event.kind != KeyEventKind::Press {
        return Action::None;
    }
    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Select(cursor),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            Position::from_index(index).map_or(Action::None, Action::Select)
        }
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Action::MoveCursor(move_cursor(cursor, code))
        }
        _ => Action::None,
    }
}
