//! Strictly Noughts - terminal tic-tac-toe
//!
//! A human plays against a heuristic AI that always opens.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use strictly_noughts::{
    Board, ConsolePlayer, GameConfig, HeuristicAi, HeuristicPlayer, Orchestrator, Player,
    Renderer,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            human_mark,
            color,
        } => run_play(config, human_mark, color),
        Command::Suggest {
            board,
            ai_mark,
            json,
        } => run_suggest(&board, ai_mark, json),
    }
}

/// Play one game on stdin/stdout
#[instrument]
fn run_play(config: Option<PathBuf>, human_mark: Option<Player>, color: bool) -> Result<()> {
    let mut config = match config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(mark) = human_mark {
        config = config.with_human_mark(mark);
    }
    if color {
        config = config.with_color(true);
    }
    info!(?config, "Starting game");

    let stdin = io::stdin();
    let ai = HeuristicPlayer::new(config.ai_name().as_str(), config.ai_mark());
    let human = ConsolePlayer::new(
        config.human_name().as_str(),
        *config.human_mark(),
        stdin.lock(),
        io::stdout(),
    );

    let mut orchestrator = Orchestrator::new(
        Box::new(ai),
        Box::new(human),
        Renderer::new(*config.color()),
        BufWriter::new(io::stdout()),
    )?;
    let phase = orchestrator.run()?;
    info!(?phase, "Game over");
    Ok(())
}

/// Print the AI's decision for a board
#[instrument]
fn run_suggest(board: &str, ai_mark: Player, json: bool) -> Result<()> {
    let board: Board = board.parse()?;
    let decision = HeuristicAi::new(ai_mark).decide(&board)?;

    if json {
        let value = serde_json::json!({
            "position": decision.position,
            "row": decision.position.row(),
            "col": decision.position.col(),
            "tier": decision.tier,
        });
        println!("{}", serde_json::to_string(&value)?);
    } else {
        println!(
            "{} -> {} ({},{}) [{}]",
            ai_mark,
            decision.position,
            decision.position.row(),
            decision.position.col(),
            decision.tier
        );
    }
    Ok(())
}
