//! Moves and placement results.

use super::position::Position;
use super::rules::Line;
use super::types::{GameStatus, Player};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player placed their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Outcome of a successful placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Placement {
    /// The move that was applied.
    applied: Move,
    /// Game status after the move.
    status: GameStatus,
}

impl Placement {
    /// The winning line to highlight, if this move won the game.
    pub fn winning_line(&self) -> Option<Line> {
        self.status.winning_line()
    }
}
