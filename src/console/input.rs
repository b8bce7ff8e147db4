//! Parsing of typed coordinates.

use crate::games::tictactoe::Position;
use tracing::instrument;

/// Parses a `row,col` line into a position.
///
/// Row and column are 1-indexed and may be separated by a comma or
/// whitespace. Returns `None` for anything that is not two numbers in
/// `1..=3`.
#[instrument]
pub fn parse_coords(line: &str) -> Option<Position> {
    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());

    let row = parts.next()?.parse::<usize>().ok()?;
    let col = parts.next()?.parse::<usize>().ok()?;
    if parts.next().is_some() {
        return None;
    }

    Position::from_coords(row, col).ok()
}
