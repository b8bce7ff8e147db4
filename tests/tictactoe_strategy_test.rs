//! Tests for the three-tier heuristic AI.

use std::collections::HashSet;
use strictly_noughts::{
    Board, Decision, GameErrorKind, HeuristicAi, Outcome, PREFERENCE, Player, Position, Tier,
    evaluate,
};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

fn wins_with(board: &Board, pos: Position, player: Player) -> bool {
    evaluate(&board.with_mark(pos, player).unwrap()) == Outcome::Winner(player)
}

/// Every board reachable by legal alternating play (X first or O first)
/// that is still undecided.
fn reachable_open_boards() -> Vec<Board> {
    fn walk(
        board: &Board,
        to_move: Player,
        seen: &mut HashSet<(Board, Player)>,
        out: &mut Vec<Board>,
    ) {
        if evaluate(board) != Outcome::NoWinnerYet || !seen.insert((board.clone(), to_move)) {
            return;
        }
        out.push(board.clone());
        for pos in board.empty_positions() {
            let next = board.with_mark(pos, to_move).unwrap();
            walk(&next, to_move.opponent(), seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(&Board::new(), Player::X, &mut seen, &mut out);
    walk(&Board::new(), Player::O, &mut seen, &mut out);
    out
}

#[test]
fn test_empty_board_takes_first_corner() {
    let ai = HeuristicAi::new(Player::O);
    assert_eq!(
        ai.decide(&Board::new()).unwrap(),
        Decision::new(Position::TopLeft, Tier::Preference)
    );
}

#[test]
fn test_completes_own_row() {
    // AI (O) holds two of the middle row; X has nothing to block.
    let ai = HeuristicAi::new(Player::O);
    let b = board("X../OO./X..");
    assert_eq!(
        ai.decide(&b).unwrap(),
        Decision::new(Position::MiddleRight, Tier::Win)
    );
}

#[test]
fn test_blocks_opponent_diagonal() {
    // X holds two of the main diagonal; O has no line to finish.
    let ai = HeuristicAi::new(Player::O);
    let b = board("X.O/.X./...");
    assert_eq!(
        ai.decide(&b).unwrap(),
        Decision::new(Position::BottomRight, Tier::Block)
    );
}

#[test]
fn test_win_beats_block() {
    // Both sides threaten; the AI finishes its own line.
    let ai = HeuristicAi::new(Player::O);
    let b = board("XX./OO./X..");
    assert_eq!(
        ai.decide(&b).unwrap(),
        Decision::new(Position::MiddleRight, Tier::Win)
    );
}

#[test]
fn test_preference_skips_taken_squares() {
    let ai = HeuristicAi::new(Player::X);
    let b = board("O.O/.../...");
    // O threatens the top row, so this is a block first.
    assert_eq!(ai.choose_move(&b).unwrap(), Position::TopCenter);

    let b = board("O../.../..X");
    assert_eq!(
        ai.decide(&b).unwrap(),
        Decision::new(Position::TopRight, Tier::Preference)
    );
}

#[test]
fn test_preference_order_when_corners_are_gone() {
    let ai = HeuristicAi::new(Player::O);
    // Corners and the top edge are taken, and no line has two of a kind
    // beside an empty square.
    let b = board("XOX/.X./OXO");
    let decision = ai.decide(&b).unwrap();
    assert_eq!(decision.tier, Tier::Preference);
    assert_eq!(decision.position, Position::MiddleLeft);
    assert_eq!(decision.position, PREFERENCE[5]);
}

#[test]
fn test_full_board_is_illegal_call() {
    let ai = HeuristicAi::new(Player::O);
    let err = ai.choose_move(&board("XOX/OXX/OXO")).unwrap_err();
    assert!(matches!(err.kind(), GameErrorKind::IllegalCall(_)));
}

#[test]
fn test_properties_hold_on_every_reachable_board() {
    let boards = reachable_open_boards();
    assert!(boards.len() > 1000);

    for b in &boards {
        for mark in [Player::X, Player::O] {
            let ai = HeuristicAi::new(mark);
            let snapshot = b.clone();
            let decision = ai.decide(b).unwrap();
            assert_eq!(b, &snapshot, "decide mutated {b}");
            assert!(b.is_empty(decision.position), "{b}: occupied pick");

            let can_win = b.empty_positions().any(|p| wins_with(b, p, mark));
            let must_block = b.empty_positions().any(|p| wins_with(b, p, mark.opponent()));

            if can_win {
                assert_eq!(decision.tier, Tier::Win, "{b}");
                assert!(wins_with(b, decision.position, mark), "{b}");
            } else if must_block {
                assert_eq!(decision.tier, Tier::Block, "{b}");
                assert!(wins_with(b, decision.position, mark.opponent()), "{b}");
            } else {
                assert_eq!(decision.tier, Tier::Preference, "{b}");
                let first_free = PREFERENCE.into_iter().find(|p| b.is_empty(*p));
                assert_eq!(Some(decision.position), first_free, "{b}");
            }
        }
    }
}
