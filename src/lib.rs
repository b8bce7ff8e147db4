//! Strictly Noughts - tic-tac-toe against a heuristic AI
//!
//! # Architecture
//!
//! - **Games**: board, win detection, heuristic AI and game state machine
//! - **Console**: line-based input, board rendering and the turn loop
//! - **Config**: TOML game settings
//!
//! # Example
//!
//! ```
//! use strictly_noughts::{Board, HeuristicAi, Player, Position};
//!
//! let board = Board::new();
//! let ai = HeuristicAi::new(Player::O);
//! assert_eq!(ai.choose_move(&board).unwrap(), Position::TopLeft);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console front end
pub use console::players::{self, ConsolePlayer, HeuristicPlayer};
pub use console::{Orchestrator, Renderer, parse_coords};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Decision, Game, GameError, GameErrorKind, HeuristicAi, MAX_MOVES, Move,
    Outcome, PREFERENCE, Phase, Player, Position, Square, Tier, check_winner, evaluate,
    rules,
};
