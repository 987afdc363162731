//! The game engine: board, turn and status behind a small call surface.

use super::action::{Move, Placement};
use super::error::EngineError;
use super::invariants::{EngineInvariants, InvariantSet};
use super::position::Position;
use super::rules;
use super::types::{Board, CellState, GameStatus, Player};
use tracing::{debug, instrument};

/// Noughts and crosses engine.
///
/// Owns the board, whose turn it is and the derived status. Every
/// operation is an immediate state transition; rejected operations leave
/// the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) status: GameStatus,
    pub(crate) moves: Vec<Move>,
}

impl GameEngine {
    /// Creates a new game: every cell free, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            moves: Vec::new(),
        }
    }

    /// Restores the initial state.
    #[instrument(skip(self), fields(moves = self.moves.len()))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        *self = Self::new();
    }

    /// Places the current player's mark at a raw board index.
    ///
    /// # Errors
    ///
    /// - [`EngineError::GameOver`] if the game is already won or drawn.
    /// - [`EngineError::InvalidIndex`] if `index` is outside 0-8.
    /// - [`EngineError::CellOccupied`] if the cell already carries a mark.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place_mark(&mut self, index: isize) -> Result<Placement, EngineError> {
        self.ensure_in_progress()?;
        let position = Position::try_from(index)?;
        self.place(position)
    }

    /// Places the current player's mark at a position.
    ///
    /// # Errors
    ///
    /// - [`EngineError::GameOver`] if the game is already won or drawn.
    /// - [`EngineError::CellOccupied`] if the cell already carries a mark.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, position: Position) -> Result<Placement, EngineError> {
        self.ensure_in_progress()?;
        if !self.board.is_free(position) {
            debug!(%position, "Cell already occupied");
            return Err(EngineError::CellOccupied(position));
        }

        let applied = Move::new(self.to_move, position);
        self.board.set(position, CellState::Marked(applied.player));
        self.moves.push(applied);
        self.to_move = applied.player.opponent();
        self.status = rules::evaluate(&self.board);

        debug!(%applied, status = %self.status, "Mark placed");
        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "Engine invariants violated after {}",
            applied
        );

        Ok(Placement::new(applied, self.status))
    }

    /// Returns the state of the cell at a raw board index.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidIndex`] if `index` is outside 0-8.
    pub fn status_of(&self, index: isize) -> Result<CellState, EngineError> {
        let position = Position::try_from(index)?;
        Ok(self.board.get(position))
    }

    /// Returns the current game status.
    pub fn current_status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves made since the last reset.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the positions still free.
    pub fn free_positions(&self) -> Vec<Position> {
        Position::free_on(&self.board)
    }

    fn ensure_in_progress(&self) -> Result<(), EngineError> {
        if self.status.is_over() {
            debug!(status = %self.status, "Placement rejected, game over");
            Err(EngineError::GameOver)
        } else {
            Ok(())
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
