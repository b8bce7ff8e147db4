//! Game orchestration between players.

use super::players::Player;
use super::render::Renderer;
use crate::games::tictactoe::{Game, Phase};
use anyhow::Result;
use std::io::Write;
use tracing::{debug, info, instrument};

/// Runs one game between the AI and a human, writing to `output`.
pub struct Orchestrator<'a, W> {
    game: Game,
    ai: Box<dyn Player + 'a>,
    human: Box<dyn Player + 'a>,
    renderer: Renderer,
    output: W,
}

impl<'a, W: Write> Orchestrator<'a, W> {
    /// Creates a new orchestrator. The AI moves first with its own mark.
    ///
    /// # Errors
    ///
    /// Fails if both players place the same mark.
    pub fn new(
        ai: Box<dyn Player + 'a>,
        human: Box<dyn Player + 'a>,
        renderer: Renderer,
        output: W,
    ) -> Result<Self> {
        let ai_mark = ai.mark();
        anyhow::ensure!(
            human.mark() == ai_mark.opponent(),
            "{} and {} both play {}",
            ai.name(),
            human.name(),
            ai_mark
        );
        Ok(Self {
            game: Game::new(ai_mark),
            ai,
            human,
            renderer,
            output,
        })
    }

    /// Runs the game loop to a terminal phase.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Phase> {
        info!("Starting game orchestration");
        writeln!(self.output, "{} is starting the game.", self.ai.name())?;

        while !self.game.is_over() {
            let player = match self.game.phase() {
                Phase::AiTurn => &mut self.ai,
                _ => &mut self.human,
            };

            debug!(player = %player.name(), "Waiting for move");
            let position = player.choose(self.game.board())?;
            self.game.place(position)?;

            write!(self.output, "{}", self.renderer.render(self.game.board()))?;
            self.output.flush()?;
        }

        let phase = self.game.phase();
        self.announce(phase)?;
        Ok(phase)
    }

    fn announce(&mut self, phase: Phase) -> Result<()> {
        match phase {
            Phase::Won(winner) => {
                let name = if winner == self.game.ai_mark() {
                    self.ai.name()
                } else {
                    self.human.name()
                };
                writeln!(self.output, "{} has won!!", name)?;
            }
            Phase::Draw => writeln!(self.output, "It's a draw!")?,
            _ => {}
        }
        writeln!(self.output, "\n\nGame Over!")?;
        writeln!(self.output, "Thank you for playing!\n\n")?;
        self.output.flush()?;
        Ok(())
    }
}
