//! Interactive session: feeds user input to the engine and reports back.

use crate::config::{ConsoleConfig, GameOverPolicy};
use crate::input::{Input, USAGE};
use crate::render;
use anyhow::Result;
use noughts_engine::{EngineError, GameEngine, Placement};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// What happened in response to one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// A mark was placed.
    Placed(Placement),
    /// A new game was started.
    NewGame,
    /// The engine refused the input.
    Rejected(EngineError),
    /// Usage was requested.
    Help,
    /// The user asked to leave.
    Quit,
    /// Nothing to do.
    Ignored,
    /// The input made no sense.
    Unrecognized(String),
}

/// A game in front of one terminal.
#[derive(Debug, Clone)]
pub struct Session {
    engine: GameEngine,
    policy: GameOverPolicy,
}

impl Session {
    /// Creates a session with a fresh game.
    pub fn new(policy: GameOverPolicy) -> Self {
        Self {
            engine: GameEngine::new(),
            policy,
        }
    }

    /// Applies one input.
    ///
    /// Under [`GameOverPolicy::Reset`] a cell input after the game has ended
    /// starts a new game instead of reaching the engine.
    #[instrument(skip(self), fields(policy = %self.policy))]
    pub fn handle(&mut self, input: Input) -> Feedback {
        match input {
            Input::Cell(index) => {
                if self.engine.current_status().is_over() && self.policy == GameOverPolicy::Reset
                {
                    debug!("Cell input after game end, starting new game");
                    self.engine.reset();
                    return Feedback::NewGame;
                }
                match self.engine.place_mark(index) {
                    Ok(placement) => Feedback::Placed(placement),
                    Err(e) => {
                        warn!(index, error = %e, "Placement rejected");
                        Feedback::Rejected(e)
                    }
                }
            }
            Input::New => {
                self.engine.reset();
                Feedback::NewGame
            }
            Input::Help => Feedback::Help,
            Input::Quit => Feedback::Quit,
            Input::Empty => Feedback::Ignored,
            Input::Unrecognized(text) => {
                warn!(%text, "Unrecognized input");
                Feedback::Unrecognized(text)
            }
        }
    }

    /// Renders the board and the status line.
    pub fn render(&self, color: bool) -> String {
        format!(
            "{}\n{}",
            render::board(self.engine.board(), self.engine.current_status(), color),
            render::status_line(self.engine.current_status(), self.engine.current_player())
        )
    }

    fn message(&self, feedback: &Feedback) -> Option<String> {
        match feedback {
            Feedback::Rejected(EngineError::GameOver) => {
                Some("The game is over. Type `new` to play again.".to_string())
            }
            Feedback::Rejected(EngineError::CellOccupied(pos)) => {
                Some(format!("{} is taken, pick another cell.", pos))
            }
            Feedback::Rejected(EngineError::InvalidIndex(_)) => {
                Some("Cells are numbered 1 to 9.".to_string())
            }
            Feedback::Unrecognized(text) => {
                Some(format!("Didn't understand `{}`. Type `help` for usage.", text))
            }
            Feedback::Help => Some(USAGE.to_string()),
            Feedback::Placed(placement) if placement.status().is_over() => {
                Some(match self.policy {
                    GameOverPolicy::Reset => "Enter any cell to play again.".to_string(),
                    GameOverPolicy::Error => "Type `new` to play again.".to_string(),
                })
            }
            _ => None,
        }
    }
}

/// Runs an interactive game until `quit` or end of input.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(config: &ConsoleConfig, input: R, mut out: W) -> Result<()> {
    let mut session = Session::new(*config.on_game_over());
    let color = *config.color();
    info!("Starting interactive game");

    if *config.show_help() {
        writeln!(out, "{}\n", USAGE)?;
    }
    writeln!(out, "{}", session.render(color))?;

    for line in input.lines() {
        let feedback = session.handle(Input::parse(&line?));
        match feedback {
            Feedback::Quit => break,
            Feedback::Ignored => continue,
            Feedback::Placed(_) | Feedback::NewGame => {
                writeln!(out, "\n{}", session.render(color))?;
            }
            _ => {}
        }
        if let Some(message) = session.message(&feedback) {
            writeln!(out, "{}", message)?;
        }
        out.flush()?;
    }

    info!("Leaving interactive game");
    Ok(())
}

/// Applies board indices in order and prints the final board.
///
/// # Errors
///
/// Fails on the first move the engine rejects.
#[instrument(skip(config, out))]
pub fn replay<W: Write>(config: &ConsoleConfig, moves: &[isize], mut out: W) -> Result<()> {
    let mut engine = GameEngine::new();
    for (turn, &index) in moves.iter().enumerate() {
        engine
            .place_mark(index)
            .map_err(|e| anyhow::anyhow!("Move {} (index {}) rejected: {}", turn + 1, index, e))?;
    }

    writeln!(
        out,
        "{}\n{}",
        render::board(engine.board(), engine.current_status(), *config.color()),
        render::status_line(engine.current_status(), engine.current_player())
    )?;
    Ok(())
}
