//! Tic-tac-toe core: board, win detection, heuristic AI and game flow.

mod action;
mod error;
mod game;
mod position;
pub mod rules;
mod strategy;
mod types;

pub use action::Move;
pub use error::{GameError, GameErrorKind};
pub use game::{Game, MAX_MOVES, Phase};
pub use position::Position;
pub use rules::{check_winner, evaluate};
pub use strategy::{Decision, HeuristicAi, PREFERENCE, Tier};
pub use types::{Board, Outcome, Player, Square};
