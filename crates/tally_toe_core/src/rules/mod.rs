//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The engine calls [`evaluate`] exactly
//! once per accepted move; nothing re-derives the outcome at render time.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use crate::{Board, Outcome};
use tracing::instrument;

/// Evaluates the board: first completed line wins, else a full board draws.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::win_for(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Position};

    fn board_from(cells: [Cell; 9]) -> Board {
        let mut board = Board::new();
        for (pos, cell) in Position::ALL.into_iter().zip(cells) {
            board.set(pos, cell);
        }
        board
    }

    #[test]
    fn test_evaluate_empty_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_evaluate_red_column() {
        use Cell::{Blue as B, Empty as E, Red as R};
        let board = board_from([B, R, B, E, R, E, B, R, E]);
        assert_eq!(evaluate(&board), Outcome::RedWins);
    }

    #[test]
    fn test_evaluate_draw() {
        use Cell::{Blue as B, Red as R};
        let board = board_from([B, R, B, B, R, R, R, B, B]);
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        use Cell::{Blue as B, Red as R};
        let board = board_from([B, R, B, R, B, R, R, B, B]);
        assert_eq!(evaluate(&board), Outcome::BlueWins);
    }
}
