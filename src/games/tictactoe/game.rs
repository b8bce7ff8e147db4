//! Whole-game state machine.
//!
//! The AI always opens. After each placement the outcome is recomputed;
//! a decided outcome ends the game, otherwise the turn passes.

use super::action::Move;
use super::error::{GameError, GameErrorKind};
use super::rules::evaluate;
use super::{Board, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Upper bound on placements in one game.
pub const MAX_MOVES: usize = 9;

/// Phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The AI is to move.
    AiTurn,
    /// The human is to move.
    HumanTurn,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
    /// Move cap reached without an outcome.
    Exhausted,
}

impl Phase {
    /// Returns true for terminal phases.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Phase::AiTurn | Phase::HumanTurn)
    }
}

/// Tic-tac-toe game between the AI and a human.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    ai_mark: Player,
    phase: Phase,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with the AI playing `ai_mark` and moving first.
    #[instrument]
    pub fn new(ai_mark: Player) -> Self {
        Self {
            board: Board::new(),
            ai_mark,
            phase: Phase::AiTurn,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The AI's mark.
    pub fn ai_mark(&self) -> Player {
        self.ai_mark
    }

    /// The human's mark.
    pub fn human_mark(&self) -> Player {
        self.ai_mark.opponent()
    }

    /// Mark of the side to move, or `None` once the game is over.
    pub fn mark_to_move(&self) -> Option<Player> {
        match self.phase {
            Phase::AiTurn => Some(self.ai_mark),
            Phase::HumanTurn => Some(self.human_mark()),
            _ => None,
        }
    }

    /// Current outcome of the board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Returns true once a terminal phase is reached.
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Places the mark of the side to move at `pos` and advances the phase.
    ///
    /// # Errors
    ///
    /// - [`GameErrorKind::GameOver`] in a terminal phase.
    /// - [`GameErrorKind::InvalidMove`] if the square is occupied.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn place(&mut self, pos: Position) -> Result<Phase, GameError> {
        let player = self.mark_to_move().ok_or(GameErrorKind::GameOver)?;

        self.board.set(pos, player)?;
        self.history.push(Move::new(player, pos));
        debug!(%player, position = %pos, moves = self.history.len(), "Mark placed");

        self.phase = match self.outcome() {
            Outcome::Winner(winner) => Phase::Won(winner),
            Outcome::Draw => Phase::Draw,
            Outcome::NoWinnerYet if self.history.len() >= MAX_MOVES => Phase::Exhausted,
            Outcome::NoWinnerYet => match self.phase {
                Phase::AiTurn => Phase::HumanTurn,
                _ => Phase::AiTurn,
            },
        };

        if self.phase.is_terminal() {
            info!(phase = ?self.phase, moves = self.history.len(), "Game finished");
        }
        Ok(self.phase)
    }
}
