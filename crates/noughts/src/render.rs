//! Board rendering.

use crossterm::style::Stylize;
use noughts_engine::{Board, CellState, GameStatus, Player, Position};

/// Renders the board, highlighting the winning line when there is one.
///
/// Free cells show their 1-based number. Winning cells are bracketed; with
/// `color`, X is blue, O is red and winning cells also get a green background.
pub fn board(board: &Board, status: &GameStatus, color: bool) -> String {
    let line = status.winning_line();
    let mut out = String::new();

    for row in 0..3 {
        for col in 0..3 {
            let pos = Position::ALL[row * 3 + col];
            let highlighted = line.is_some_and(|l| l.contains(pos));
            out.push_str(&cell(board.get(pos), pos, highlighted, color));
            if col < 2 {
                out.push('|');
            }
        }
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }
    out
}

fn cell(state: CellState, pos: Position, highlighted: bool, color: bool) -> String {
    let symbol = match state {
        CellState::Free => (pos.to_index() + 1).to_string(),
        CellState::Marked(player) => player.to_string(),
    };
    let text = if highlighted {
        format!("[{}]", symbol)
    } else {
        format!(" {} ", symbol)
    };

    if !color {
        return text;
    }

    let styled = match state {
        CellState::Free => text.dark_grey(),
        CellState::Marked(Player::X) => text.blue().bold(),
        CellState::Marked(Player::O) => text.red().bold(),
    };
    if highlighted {
        styled.on_green().to_string()
    } else {
        styled.to_string()
    }
}

/// One-line summary of the game state.
pub fn status_line(status: &GameStatus, to_move: Player) -> String {
    match status {
        GameStatus::InProgress => format!("Player {} to move.", to_move),
        GameStatus::Won { winner, line } => {
            let cells: Vec<String> = line
                .indices()
                .iter()
                .map(|i| (i + 1).to_string())
                .collect();
            format!("Player {} wins with {}!", winner, cells.join("-"))
        }
        GameStatus::Drawn => "It's a draw.".to_string(),
    }
}
