//! Engine error types.

use super::position::Position;
use derive_more::{Display, Error};

/// Error returned when the engine rejects an operation.
///
/// The engine's state is unchanged whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum EngineError {
    /// Index outside 0-8.
    #[display("Index {} is outside the board (must be 0-8)", _0)]
    InvalidIndex(#[error(not(source))] isize),

    /// The cell already carries a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The game has been won or drawn; reset before placing again.
    #[display("Game is already over")]
    GameOver,
}
