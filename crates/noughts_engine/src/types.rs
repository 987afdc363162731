//! Core domain types for noughts and crosses.

use super::position::Position;
use super::rules::Line;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// State of a single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    /// Nobody has marked this cell yet.
    #[default]
    Free,
    /// Cell carries a player's mark.
    Marked(Player),
}

impl CellState {
    /// Returns true if the cell is free.
    pub fn is_free(self) -> bool {
        self == CellState::Free
    }
}

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [CellState; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const CELLS: usize = 9;

    /// Creates a new board with every cell free.
    pub fn new() -> Self {
        Self {
            cells: [CellState::Free; Self::CELLS],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> CellState {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: CellState) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if the cell at a position is free.
    pub fn is_free(&self, pos: Position) -> bool {
        self.get(pos).is_free()
    }

    /// Number of marked cells.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_free()).count()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[CellState; 9] {
        &self.cells
    }
}

/// Current status of the game.
///
/// Derived from the board after every placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with `winner` completing `line`.
    Won {
        /// The player who completed the line.
        winner: Player,
        /// The completed line, for highlighting.
        line: Line,
    },
    /// Board is full with no completed line.
    Drawn,
}

impl GameStatus {
    /// Returns true once the game has reached a terminal state.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won { winner, .. } => write!(f, "Player {} wins", winner),
            GameStatus::Drawn => write!(f, "Draw"),
        }
    }
}
