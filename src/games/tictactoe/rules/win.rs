//! Win detection logic for tic-tac-toe.

use super::super::{Board, Outcome, Player, Position, Square};
use super::draw::is_draw;
use tracing::instrument;

/// Three positions that win when uniformly marked.
pub type Line = [Position; 3];

/// The 8 winning lines, in evaluation order.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first complete line and its owner.
pub fn winning_line(board: &Board) -> Option<(Line, Player)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq == board.get(b) && sq == board.get(c) {
            match sq {
                Square::Occupied(player) => Some((line, player)),
                Square::Empty => None,
            }
        } else {
            None
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board), fields(board = %board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(_, player)| player)
}

/// Derives the outcome of a board.
///
/// Safe to call on hypothetical boards; nothing is stored.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(player) = check_winner(board) {
        Outcome::Winner(player)
    } else if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::NoWinnerYet
    }
}
