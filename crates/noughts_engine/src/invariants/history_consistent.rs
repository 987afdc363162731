//! History consistency invariant: one recorded move per marked cell.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: the number of recorded moves equals the number of marked cells.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.moves().len() == engine.board().marked_count()
    }

    fn description() -> &'static str {
        "Move count matches number of marked cells"
    }
}
