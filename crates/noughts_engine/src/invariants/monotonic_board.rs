//! Monotonic board invariant: cells never change once marked.

use super::super::{Board, CellState, GameEngine};
use super::Invariant;

/// Invariant: marked cells are never overwritten.
///
/// Verified by replaying the recorded moves onto a fresh board, requiring
/// each target cell to be free and the result to match the live board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut reconstructed = Board::new();

        for mov in engine.moves() {
            if !reconstructed.is_free(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, CellState::Marked(mov.player));
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
