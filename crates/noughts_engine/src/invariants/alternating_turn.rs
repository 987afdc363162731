//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: players alternate turns, X first.
///
/// The player to move must also match the number of moves made.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let moves = engine.moves();

        if moves.first().is_some_and(|m| m.player != Player::X) {
            return false;
        }

        if moves.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected_next = if moves.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        engine.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
