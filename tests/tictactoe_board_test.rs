//! Tests for the tic-tac-toe board and positions.

use strictly_noughts::{Board, GameErrorKind, Outcome, Player, Position, Square, evaluate};
use strum::IntoEnumIterator;

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.move_count(), 0);
    assert!(!board.is_full());
    for pos in Position::ALL {
        assert!(board.is_empty(pos));
        assert_eq!(board.get(pos), Square::Empty);
    }
}

#[test]
fn test_set_and_get() {
    let mut board = Board::new();
    board.set(Position::Center, Player::X).unwrap();
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(board.cell(2, 2).unwrap(), Square::Occupied(Player::X));
    assert!(!board.is_empty(Position::Center));
    assert_eq!(board.move_count(), 1);
}

#[test]
fn test_cell_out_of_range() {
    let board = Board::new();
    for (row, col) in [(0, 1), (1, 0), (4, 2), (2, 4)] {
        let err = board.cell(row, col).unwrap_err();
        assert_eq!(err.kind(), &GameErrorKind::OutOfRange { row, col });
    }
}

#[test]
fn test_set_occupied_is_invalid_move() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Player::O).unwrap();
    let before = board.clone();

    let err = board.set(Position::TopLeft, Player::X).unwrap_err();
    assert_eq!(err.kind(), &GameErrorKind::InvalidMove(Position::TopLeft));
    assert!(err.to_string().contains("occupied"));
    assert_eq!(board, before);
}

#[test]
fn test_place_evaluate_revert_round_trip() {
    let mut board: Board = "XO./.X./...".parse().unwrap();
    let before = board.clone();

    board.set(Position::BottomRight, Player::X).unwrap();
    assert_eq!(evaluate(&board), Outcome::Winner(Player::X));
    board.clear(Position::BottomRight);

    assert_eq!(board, before);
}

#[test]
fn test_with_mark_leaves_original_untouched() {
    let board: Board = "XX./OO./...".parse().unwrap();
    let next = board.with_mark(Position::TopRight, Player::X).unwrap();
    assert_eq!(evaluate(&next), Outcome::Winner(Player::X));
    assert!(board.is_empty(Position::TopRight));
    assert!(board.with_mark(Position::TopLeft, Player::O).is_err());
}

#[test]
fn test_empty_positions_row_major() {
    let board: Board = "X.O/.X./OX.".parse().unwrap();
    let empty: Vec<_> = board.empty_positions().collect();
    assert_eq!(
        empty,
        vec![
            Position::TopCenter,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomRight,
        ]
    );
}

#[test]
fn test_display_and_parse() {
    let board: Board = " x.o / -X_ / ... ".parse().unwrap();
    assert_eq!(board.to_string(), "X.O/.X./...");
    assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
}

#[test]
fn test_parse_rejects_malformed() {
    for input in ["", "XO", "XOX/OXO/OXOX", "XOZ/.../..."] {
        let err = input.parse::<Board>().unwrap_err();
        assert!(
            matches!(err.kind(), GameErrorKind::MalformedBoard(_)),
            "{input:?} gave {err}"
        );
    }
}

#[test]
fn test_position_coords() {
    assert_eq!(Position::from_coords(1, 1).unwrap(), Position::TopLeft);
    assert_eq!(Position::from_coords(2, 3).unwrap(), Position::MiddleRight);
    assert_eq!(Position::from_coords(3, 2).unwrap(), Position::BottomCenter);
    assert!(Position::from_coords(0, 2).is_err());
    assert!(Position::from_coords(2, 4).is_err());

    for pos in Position::ALL {
        assert_eq!(Position::from_coords(pos.row(), pos.col()).unwrap(), pos);
        assert_eq!(Position::from_index(pos.to_index()), Some(pos));
    }
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_iteration_is_row_major() {
    let iterated: Vec<_> = Position::iter().collect();
    assert_eq!(iterated, Position::ALL.to_vec());
    for (idx, pos) in Position::iter().enumerate() {
        assert_eq!(pos.to_index(), idx);
    }
}

#[test]
fn test_corners() {
    let corners: Vec<_> = Position::ALL.into_iter().filter(|p| p.is_corner()).collect();
    assert_eq!(corners, Position::CORNERS.to_vec());
}

#[test]
fn test_player_parse_and_opponent() {
    assert_eq!("x".parse::<Player>().unwrap(), Player::X);
    assert_eq!("O".parse::<Player>().unwrap(), Player::O);
    assert!("Z".parse::<Player>().is_err());
    assert_eq!(Player::X.opponent(), Player::O);
    assert_eq!(Player::O.opponent().opponent(), Player::O);
}
