//! Text rendering of the board.

use crate::games::tictactoe::{Board, Player, Position, Square};
use crossterm::style::Stylize;

/// Formats boards for the console.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// Creates a renderer; `color` styles X red and O blue.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Renders the board with a header, one `|a|b|c` row per line and a
    /// dash rule under each row.
    pub fn render(&self, board: &Board) -> String {
        let mut out = String::from("\n\nTic Tac Toe Board::\n\n");
        for row in Position::ALL.chunks(3) {
            let mut width = 0;
            for &pos in row {
                out.push('|');
                out.push_str(&self.symbol(board.get(pos)));
                width += 2;
            }
            out.push('\n');
            out.push_str(&"-".repeat(width));
            out.push('\n');
        }
        out.push_str("\n\n");
        out
    }

    fn symbol(&self, square: Square) -> String {
        match square {
            Square::Empty => " ".to_string(),
            Square::Occupied(Player::X) if self.color => "X".red().to_string(),
            Square::Occupied(Player::O) if self.color => "O".blue().to_string(),
            Square::Occupied(player) => player.to_string(),
        }
    }
}
