//! Noughts and crosses game logic.
//!
//! [`GameEngine`] owns a 3x3 [`Board`], tracks whose turn it is and derives a
//! [`GameStatus`] after every placement. It knows nothing about rendering:
//! a presentation layer maps user input to board indices, calls
//! [`GameEngine::place_mark`] and draws whatever comes back.
//!
//! ```
//! use noughts_engine::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4] {
//!     engine.place_mark(index).unwrap();
//! }
//! let placement = engine.place_mark(2).unwrap();
//!
//! assert_eq!(placement.status().winner(), Some(Player::X));
//! assert_eq!(placement.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
//! assert!(matches!(engine.current_status(), GameStatus::Won { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, Placement};
pub use engine::GameEngine;
pub use error::EngineError;
pub use position::Position;
pub use rules::{LINES, Line};
pub use types::{Board, CellState, GameStatus, Player};
