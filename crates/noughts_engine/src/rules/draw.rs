//! Draw detection.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (every cell marked).
///
/// A full board with no completed line is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_free())
}
