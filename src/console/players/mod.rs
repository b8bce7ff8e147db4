//! Player trait and implementations.

mod heuristic;
mod human;

pub use heuristic::HeuristicPlayer;
pub use human::ConsolePlayer;

use crate::games::tictactoe::{Board, Player as Mark, Position};
use anyhow::Result;

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// The returned position must be empty on `board`.
    fn choose(&mut self, board: &Board) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Mark this player places.
    fn mark(&self) -> Mark;
}
