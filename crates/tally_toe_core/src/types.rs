//! Core domain types for Blue/Red tic-tac-toe.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Position;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Blue player (always moves first).
    Blue,
    /// Red player.
    Red,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Blue => Player::Red,
            Player::Red => Player::Blue,
        }
    }

    /// Key under which this player's score is persisted.
    pub fn score_key(self) -> &'static str {
        match self {
            Player::Blue => crate::BLUE_SCORE_KEY,
            Player::Red => crate::RED_SCORE_KEY,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Marked by Blue.
    Blue,
    /// Marked by Red.
    Red,
}

impl Cell {
    /// Returns the player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Blue => Some(Player::Blue),
            Cell::Red => Some(Player::Red),
        }
    }

    /// Returns true if no player has marked this cell.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Board symbol: `X` for Blue, `O` for Red, blank when empty.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => " ",
            Cell::Blue => "X",
            Cell::Red => "O",
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Blue => Cell::Blue,
            Player::Red => Cell::Red,
        }
    }
}

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if the cell at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of cells marked by the given player.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.owner() == Some(player))
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => write!(f, "{}", pos + 1)?,
                    cell => f.write_str(cell.symbol())?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Decided/undecided status of the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet and free cells remain.
    #[default]
    InProgress,
    /// Blue completed a line.
    BlueWins,
    /// Red completed a line.
    RedWins,
    /// Board is full with no line.
    Draw,
}

impl Outcome {
    /// Outcome for a win by the given player.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::Blue => Outcome::BlueWins,
            Player::Red => Outcome::RedWins,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::BlueWins => Some(Player::Blue),
            Outcome::RedWins => Some(Player::Red),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_decided(self) -> bool {
        self != Outcome::InProgress
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::BlueWins => write!(f, "Winner: Blue"),
            Outcome::RedWins => write!(f, "Winner: Red"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Cumulative win counters, persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    blue: u32,
    red: u32,
}

impl ScoreBoard {
    /// Creates a score board with the given counts.
    pub fn new(blue: u32, red: u32) -> Self {
        Self { blue, red }
    }

    /// Blue's win count.
    pub fn blue(&self) -> u32 {
        self.blue
    }

    /// Red's win count.
    pub fn red(&self) -> u32 {
        self.red
    }

    /// Adds one win for the player and returns the new count.
    pub(crate) fn increment(&mut self, player: Player) -> u32 {
        let score = match player {
            Player::Blue => &mut self.blue,
            Player::Red => &mut self.red,
        };
        *score = score.saturating_add(1);
        *score
    }
}

/// Complete game state, handed to presenters as a read-only snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Player,
    outcome: Outcome,
    scores: ScoreBoard,
}

impl GameState {
    /// Creates a fresh game carrying the given scores.
    pub fn new(scores: ScoreBoard) -> Self {
        Self {
            board: Board::new(),
            turn: Player::Blue,
            outcome: Outcome::InProgress,
            scores,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the score board.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Human-readable status: the winner, `Draw`, or the next player.
    pub fn status_line(&self) -> String {
        match self.outcome {
            Outcome::InProgress => format!("Next player: {}", self.turn),
            decided => decided.to_string(),
        }
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn scores_mut(&mut self) -> &mut ScoreBoard {
        &mut self.scores
    }

    pub(crate) fn set_turn(&mut self, turn: Player) {
        self.turn = turn;
    }

    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }

    /// Clears board, turn and outcome. Scores are kept.
    pub(crate) fn clear(&mut self) {
        *self = Self::new(self.scores);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(ScoreBoard::default())
    }
}
