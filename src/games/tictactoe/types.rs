//! Core domain types for tic-tac-toe.

use super::error::{GameError, GameErrorKind};
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The number of occupied squares always equals the number of marks placed
/// since the board was created; `set` refuses to overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at 1-indexed `(row, col)` coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::OutOfRange`] outside the 3x3 grid.
    pub fn cell(&self, row: usize, col: usize) -> Result<Square, GameError> {
        Ok(self.get(Position::from_coords(row, col)?))
    }

    /// Places `player`'s mark at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::InvalidMove`] if the square is occupied.
    /// The board is left untouched in that case.
    #[instrument(skip(self))]
    pub fn set(&mut self, pos: Position, player: Player) -> Result<(), GameError> {
        if !self.is_empty(pos) {
            return Err(GameErrorKind::InvalidMove(pos).into());
        }
        self.squares[pos.to_index()] = Square::Occupied(player);
        Ok(())
    }

    /// Resets a square to empty.
    pub fn clear(&mut self, pos: Position) {
        self.squares[pos.to_index()] = Square::Empty;
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    ///
    /// # Errors
    ///
    /// Same as [`Board::set`].
    pub fn with_mark(&self, pos: Position, player: Player) -> Result<Board, GameError> {
        let mut next = self.clone();
        next.set(pos, player)?;
        Ok(next)
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::iter().filter(|pos| self.is_empty(*pos))
    }

}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact form: rows separated by `/`, `.` for empty squares.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, square) in self.squares.iter().enumerate() {
            if idx > 0 && idx % 3 == 0 {
                f.write_str("/")?;
            }
            let symbol = match square {
                Square::Empty => '.',
                Square::Occupied(Player::X) => 'X',
                Square::Occupied(Player::O) => 'O',
            };
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parses the compact form. Whitespace and `/` are ignored; `.`, `-`
    /// and `_` mean empty; marks are case-insensitive.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '/') {
            let square = match c {
                '.' | '-' | '_' => Square::Empty,
                'x' | 'X' => Square::Occupied(Player::X),
                'o' | 'O' => Square::Occupied(Player::O),
                other => {
                    return Err(GameErrorKind::MalformedBoard(format!(
                        "unexpected character '{}'",
                        other
                    ))
                    .into());
                }
            };
            squares.push(square);
        }

        let squares: [Square; 9] = squares.try_into().map_err(|v: Vec<Square>| {
            GameError::new(GameErrorKind::MalformedBoard(format!(
                "expected 9 squares, found {}",
                v.len()
            )))
        })?;
        Ok(Self { squares })
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and empty squares remain.
    NoWinnerYet,
    /// A line holds three of this player's marks.
    Winner(Player),
    /// Board is full with no complete line.
    Draw,
}
