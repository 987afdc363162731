//! Property tests for the game engine.

use noughts_engine::invariants::{EngineInvariants, InvariantSet};
use noughts_engine::{CellState, EngineError, GameEngine, GameStatus, rules};
use proptest::prelude::*;

proptest! {
    /// Property: any sequence of placements keeps the engine consistent.
    #[test]
    fn placements_preserve_invariants(indices in prop::collection::vec(-2isize..11, 0..30)) {
        let mut engine = GameEngine::new();

        for index in indices {
            let before = engine.clone();
            match engine.place_mark(index) {
                Ok(placement) => {
                    prop_assert_eq!(placement.applied().player, before.current_player());
                    prop_assert_eq!(engine.current_player(), before.current_player().opponent());
                    prop_assert_eq!(engine.moves().len(), before.moves().len() + 1);
                    // Previously marked cells never change.
                    for (old, new) in before.board().cells().iter().zip(engine.board().cells()) {
                        if *old != CellState::Free {
                            prop_assert_eq!(old, new);
                        }
                    }
                    prop_assert_eq!(engine.current_status(), &rules::evaluate(engine.board()));
                }
                Err(err) => {
                    prop_assert_eq!(&engine, &before, "{} mutated the engine", err);
                    match err {
                        EngineError::GameOver => {
                            prop_assert!(before.current_status().is_over());
                        }
                        EngineError::InvalidIndex(i) => {
                            prop_assert!(!(0..9).contains(&i));
                        }
                        EngineError::CellOccupied(pos) => {
                            prop_assert!(!before.board().is_free(pos));
                        }
                    }
                }
            }
            prop_assert!(EngineInvariants::check_all(&engine).is_ok());
        }
    }

    /// Property: a game always ends within nine placements.
    #[test]
    fn game_ends_within_nine_moves(order in Just((0isize..9).collect::<Vec<_>>()).prop_shuffle()) {
        let mut engine = GameEngine::new();

        for index in order {
            if engine.current_status().is_over() {
                break;
            }
            engine.place_mark(index).unwrap();
        }

        prop_assert!(engine.current_status().is_over());
        if let GameStatus::Won { winner, line } = engine.current_status() {
            for pos in line.positions() {
                prop_assert_eq!(engine.board().get(pos), CellState::Marked(*winner));
            }
        } else {
            prop_assert!(rules::is_full(engine.board()));
        }
    }

    /// Property: reset is idempotent from any reachable state.
    #[test]
    fn reset_is_idempotent(indices in prop::collection::vec(0isize..9, 0..9)) {
        let mut engine = GameEngine::new();
        for index in indices {
            let _ = engine.place_mark(index);
        }

        engine.reset();
        let once = engine.clone();
        engine.reset();

        prop_assert_eq!(&engine, &once);
        prop_assert_eq!(&engine, &GameEngine::new());
    }
}
