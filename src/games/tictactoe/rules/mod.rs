//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the AI can run them against hypothetical boards.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, Line, check_winner, evaluate, winning_line};
