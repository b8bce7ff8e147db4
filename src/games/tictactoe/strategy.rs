//! Three-tier heuristic move selection.
//!
//! The AI looks one ply ahead only:
//!
//! 1. **Win** - take a square that completes one of its own lines.
//! 2. **Block** - take a square the opponent would complete a line with.
//! 3. **Preference** - take the first empty square of [`PREFERENCE`].
//!
//! Within a tier, empty squares are scanned row-major and the first match
//! wins. There is no deeper search, so a careful opponent can beat it.

use super::error::{GameError, GameErrorKind};
use super::rules::evaluate;
use super::{Board, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Fallback order when neither a win nor a block exists.
///
/// Corners first, then three edges, the center, and the last edge.
pub const PREFERENCE: [Position; 9] = [
    Position::TopLeft,
    Position::TopRight,
    Position::BottomLeft,
    Position::BottomRight,
    Position::TopCenter,
    Position::MiddleLeft,
    Position::Center,
    Position::MiddleRight,
    Position::BottomCenter,
];

/// Which heuristic tier produced a move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    /// Completes one of the AI's lines.
    Win,
    /// Denies the opponent a completed line.
    Block,
    /// First free square of the preference list.
    Preference,
}

/// A chosen square together with the tier that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Decision {
    /// Square to play.
    pub position: Position,
    /// Tier that selected it.
    pub tier: Tier,
}

/// Heuristic opponent playing a fixed mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicAi {
    mark: Player,
}

impl HeuristicAi {
    /// Creates an AI playing `mark`.
    pub fn new(mark: Player) -> Self {
        Self { mark }
    }

    /// The AI's mark.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// Chooses the next square for the AI.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::IllegalCall`] when the board has no empty
    /// square.
    pub fn choose_move(&self, board: &Board) -> Result<Position, GameError> {
        self.decide(board).map(|decision| decision.position)
    }

    /// Chooses the next square and reports which tier picked it.
    ///
    /// # Errors
    ///
    /// Same as [`HeuristicAi::choose_move`].
    #[instrument(skip(board), fields(board = %board))]
    pub fn decide(&self, board: &Board) -> Result<Decision, GameError> {
        if board.is_full() {
            return Err(GameErrorKind::IllegalCall("choose_move on a full board").into());
        }

        let decision = if let Some(pos) = completing_square(board, self.mark) {
            Decision::new(pos, Tier::Win)
        } else if let Some(pos) = completing_square(board, self.mark.opponent()) {
            Decision::new(pos, Tier::Block)
        } else {
            let pos = PREFERENCE
                .into_iter()
                .find(|pos| board.is_empty(*pos))
                .ok_or(GameErrorKind::IllegalCall("no empty square in preference list"))?;
            Decision::new(pos, Tier::Preference)
        };

        debug!(position = %decision.position, tier = %decision.tier, "AI decided");
        Ok(decision)
    }
}

/// First empty square (row-major) where `player` would win by moving.
///
/// Each candidate is tried on a copy of the board, so `board` is never
/// touched.
fn completing_square(board: &Board, player: Player) -> Option<Position> {
    board.empty_positions().find(|&pos| {
        board
            .with_mark(pos, player)
            .map(|next| evaluate(&next) == Outcome::Winner(player))
            .unwrap_or(false)
    })
}
