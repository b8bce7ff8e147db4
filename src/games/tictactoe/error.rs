//! Error types for tic-tac-toe game logic.

use super::Position;
use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong inside the game core.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// Coordinates outside the 1-3 playing area.
    #[display("Coordinates ({}, {}) are outside the 3x3 grid", row, col)]
    OutOfRange {
        /// Requested row (1-indexed).
        row: usize,
        /// Requested column (1-indexed).
        col: usize,
    },

    /// The target square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    InvalidMove(Position),

    /// An operation was invoked when its precondition cannot hold.
    #[display("Illegal call: {}", _0)]
    IllegalCall(&'static str),

    /// A move was attempted after the game ended.
    #[display("Game is already over")]
    GameOver,

    /// A textual board could not be parsed.
    #[display("Malformed board: {}", _0)]
    MalformedBoard(String),
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct GameError {
    /// Error kind.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &GameErrorKind {
        &self.kind
    }
}

impl From<GameErrorKind> for GameError {
    #[track_caller]
    fn from(kind: GameErrorKind) -> Self {
        Self::new(kind)
    }
}
