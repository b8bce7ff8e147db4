//! Human player reading coordinates from a line-based input.

use super::Player;
use crate::console::input::parse_coords;
use crate::games::tictactoe::{Board, Player as Mark, Position};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

/// Human player prompting on `output` and reading lines from `input`.
pub struct ConsolePlayer<R, W> {
    name: String,
    mark: Mark,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    /// Creates a new console player.
    pub fn new(name: impl Into<String>, mark: Mark, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            mark,
            input,
            output,
        }
    }

    fn prompt(&mut self, retry: bool) -> Result<()> {
        writeln!(
            self.output,
            "Please enter {}row,col as input where you'd like to put {}. Ex: 1,2",
            if retry { "valid " } else { "" },
            self.mark
        )?;
        self.output.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<R, W> {
    fn choose(&mut self, board: &Board) -> Result<Position> {
        let mut retry = false;
        loop {
            self.prompt(retry)?;

            // Non-UTF-8 lines fall through to the re-prompt arm.
            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                anyhow::bail!("Input closed");
            }
            let line = String::from_utf8_lossy(&buf);

            match parse_coords(&line) {
                Some(pos) if board.is_empty(pos) => {
                    debug!(player = %self.name, position = %pos, "Human chose position");
                    return Ok(pos);
                }
                Some(pos) => debug!(position = %pos, "Square occupied, re-prompting"),
                None => debug!(input = line.trim(), "Unparseable input, re-prompting"),
            }
            retry = true;
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }
}
