//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board
//! storage so they can be evaluated against any board, legal or not.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, winning_line};

use super::types::{Board, GameStatus};
use tracing::instrument;

/// Derives the game status from a board.
///
/// A completed line wins, reporting the first match in [`LINES`] order.
/// Otherwise a full board is drawn and anything else is still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((winner, line)) = winning_line(board) {
        GameStatus::Won { winner, line }
    } else if is_full(board) {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}
