//! Named squares of the tic-tac-toe board.

use super::error::{GameError, GameErrorKind};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Storage is row-major (index 0-8). Human-facing coordinates are
/// 1-indexed `(row, col)` pairs and only appear at [`Position::from_coords`],
/// [`Position::row`] and [`Position::col`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (row 1, col 1)
    TopLeft,
    /// Top-center (row 1, col 2)
    TopCenter,
    /// Top-right (row 1, col 3)
    TopRight,
    /// Middle-left (row 2, col 1)
    MiddleLeft,
    /// Center (row 2, col 2)
    Center,
    /// Middle-right (row 2, col 3)
    MiddleRight,
    /// Bottom-left (row 3, col 1)
    BottomLeft,
    /// Bottom-center (row 3, col 2)
    BottomCenter,
    /// Bottom-right (row 3, col 3)
    BottomRight,
}

impl Position {
    /// All 9 positions, row-major.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The four corners.
    pub const CORNERS: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from 1-indexed coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::OutOfRange`] unless both `row` and `col`
    /// are in `1..=3`.
    #[instrument]
    pub fn from_coords(row: usize, col: usize) -> Result<Self, GameError> {
        if !(1..=3).contains(&row) || !(1..=3).contains(&col) {
            return Err(GameErrorKind::OutOfRange { row, col }.into());
        }
        Ok(Self::ALL[(row - 1) * 3 + (col - 1)])
    }

    /// Row of this position (1-3).
    pub fn row(self) -> usize {
        self.to_index() / 3 + 1
    }

    /// Column of this position (1-3).
    pub fn col(self) -> usize {
        self.to_index() % 3 + 1
    }

    /// Returns true for the four corner squares.
    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
