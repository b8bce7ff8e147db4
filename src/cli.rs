//! Command-line interface for the tic-tac-toe game.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_noughts::Player;

/// Tic-tac-toe against a heuristic AI
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a heuristic AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal (the AI moves first)
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Mark for the human player (X or O)
        #[arg(long)]
        human_mark: Option<Player>,

        /// Colour the marks
        #[arg(long)]
        color: bool,
    },

    /// Print the AI's move for a board
    Suggest {
        /// Board in compact form, e.g. "X.O/.X./..."
        #[arg(short, long)]
        board: String,

        /// Mark the AI plays
        #[arg(long, default_value = "O")]
        ai_mark: Player,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
