//! Heuristic AI player.

use super::Player;
use crate::games::tictactoe::{Board, HeuristicAi, Player as Mark, Position};
use anyhow::Result;
use tracing::debug;

/// Player backed by [`HeuristicAi`].
pub struct HeuristicPlayer {
    name: String,
    ai: HeuristicAi,
}

impl HeuristicPlayer {
    /// Creates a heuristic player using `mark`.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            ai: HeuristicAi::new(mark),
        }
    }
}

impl Player for HeuristicPlayer {
    fn choose(&mut self, board: &Board) -> Result<Position> {
        debug!(ai = %self.name, "AI making move");
        let decision = self.ai.decide(board)?;
        debug!(
            ai = %self.name,
            position = %decision.position,
            tier = %decision.tier,
            "AI chose position"
        );
        Ok(decision.position)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.ai.mark()
    }
}
