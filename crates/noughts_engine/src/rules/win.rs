//! Win detection.

use super::super::{Board, CellState, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions that win when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    const fn new(a: Position, b: Position, c: Position) -> Self {
        Self([a, b, c])
    }

    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Returns the player holding all three cells, if one does.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.0.map(|pos| board.get(pos));
        match a {
            CellState::Marked(player) if a == b && b == c => Some(player),
            _ => None,
        }
    }
}

/// The 8 winning lines: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = {
    use Position::*;
    [
        // Rows
        Line::new(TopLeft, TopCenter, TopRight),
        Line::new(MiddleLeft, Center, MiddleRight),
        Line::new(BottomLeft, BottomCenter, BottomRight),
        // Columns
        Line::new(TopLeft, MiddleLeft, BottomLeft),
        Line::new(TopCenter, Center, BottomCenter),
        Line::new(TopRight, MiddleRight, BottomRight),
        // Diagonals
        Line::new(TopLeft, Center, BottomRight),
        Line::new(TopRight, Center, BottomLeft),
    ]
};

/// Finds the first completed line in [`LINES`] order.
///
/// Boards with several completed lines (unreachable in legal play) report
/// the earliest one.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    LINES
        .iter()
        .find_map(|line| line.owner(board).map(|player| (player, *line)))
}
