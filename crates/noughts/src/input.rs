//! Maps typed input to front end actions.

use noughts_engine::Position;
use tracing::instrument;

/// A line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Mark a cell, as a raw board index. May be out of range.
    Cell(isize),
    /// Start a new game.
    New,
    /// Print usage.
    Help,
    /// Leave the game.
    Quit,
    /// Blank line.
    Empty,
    /// Anything else.
    Unrecognized(String),
}

impl Input {
    /// Parses a line.
    ///
    /// Numbers are the 1-based cell numbers shown on the board, so `1` is
    /// board index 0. Position labels such as `center` or `top-left` are
    /// accepted too.
    #[instrument]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Input::Empty;
        }

        if let Ok(number) = trimmed.parse::<isize>() {
            return Input::Cell(number.saturating_sub(1));
        }

        match trimmed.to_lowercase().as_str() {
            "new" | "n" | "reset" => Input::New,
            "help" | "h" | "?" => Input::Help,
            "quit" | "q" | "exit" => Input::Quit,
            _ => Position::from_label(trimmed)
                .map(|pos| Input::Cell(pos.to_index() as isize))
                .unwrap_or_else(|| Input::Unrecognized(trimmed.to_string())),
        }
    }
}

/// Usage text for interactive play.
pub const USAGE: &str = "\
Enter a cell number (1-9) or a position such as `center` or `top-left`.
Commands: `new` starts a new game, `help` shows this text, `quit` exits.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_one_based() {
        assert_eq!(Input::parse("1"), Input::Cell(0));
        assert_eq!(Input::parse(" 9 \n"), Input::Cell(8));
        assert_eq!(Input::parse("0"), Input::Cell(-1));
        assert_eq!(Input::parse("10"), Input::Cell(9));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Input::parse("center"), Input::Cell(4));
        assert_eq!(Input::parse("Bottom-Right"), Input::Cell(8));
    }

    #[test]
    fn test_commands() {
        assert_eq!(Input::parse("new"), Input::New);
        assert_eq!(Input::parse("Q"), Input::Quit);
        assert_eq!(Input::parse("?"), Input::Help);
        assert_eq!(Input::parse("   "), Input::Empty);
        assert_eq!(Input::parse("banana"), Input::Unrecognized("banana".into()));
    }
}
