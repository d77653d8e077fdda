//! End-to-end properties of the board engine.

use tactix::{Board, Cell, Player, Status};

#[test]
fn position_coordinate_round_trip() {
    for dimension in [1, 2, 3, 5, 8] {
        let board = Board::new(dimension).unwrap();
        for position in 0..dimension * dimension {
            let (row, col) = board.to_coordinates(position).unwrap();
            assert_eq!(board.to_position(row, col).unwrap(), position);
            assert_eq!(board.to_coordinates(row * dimension + col).unwrap(), (row, col));
        }
        assert!(board.to_coordinates(dimension * dimension).is_err());
        assert!(board.to_position(dimension, 0).is_err());
    }
}

#[test]
fn board_fills_and_then_rejects_all_placements() {
    let dimension = 4;
    let mut board = Board::new(dimension).unwrap();
    let players = [Player::X, Player::O];

    for position in 0..dimension * dimension {
        assert!(!board.is_full());
        board.place(position, players[position % 2]).unwrap();
    }

    assert!(board.is_full());
    assert_eq!(board.filled_count(), dimension * dimension);
    for position in 0..dimension * dimension {
        assert!(board.place(position, Player::X).is_err());
    }
}

#[test]
fn filled_count_matches_grid() {
    let mut board = Board::new(3).unwrap();
    let moves = [(0, Player::X), (4, Player::O), (8, Player::X)];
    for (position, player) in moves {
        board.place(position, player).unwrap();
    }

    let occupied = board
        .cells()
        .iter()
        .filter(|&&cell| cell != Cell::Empty)
        .count();
    assert_eq!(board.filled_count(), occupied);
}

#[test]
fn status_never_reverses() {
    let mut board = Board::new(3).unwrap();
    let mut seen_terminal = false;

    // X marches down the descending diagonal while O plays elsewhere.
    let moves = [
        (0, Player::X),
        (1, Player::O),
        (4, Player::X),
        (2, Player::O),
        (8, Player::X),
    ];
    for (position, player) in moves {
        board.place(position, player).unwrap();
        let status = board.status();
        if seen_terminal {
            assert!(status.is_terminal());
        }
        seen_terminal = status.is_terminal();
    }

    assert_eq!(board.status(), Status::Won(Player::X));
}

#[test]
fn full_descending_diagonal_reports_won_immediately() {
    let mut board = Board::new(3).unwrap();
    board.place(0, Player::X).unwrap();
    assert_eq!(board.status(), Status::InProgress);
    board.place(4, Player::X).unwrap();
    assert_eq!(board.status(), Status::InProgress);
    board.place(8, Player::X).unwrap();

    // The game is decided the moment the third diagonal cell lands; no
    // move selection ever happens in this state.
    assert_eq!(board.status(), Status::Won(Player::X));
}

#[test]
fn early_draw_on_dead_board_with_empty_cells() {
    // X O X
    // X O O
    // O X .
    let mut board = Board::new(3).unwrap();
    for (position, player) in [
        (0, Player::X),
        (1, Player::O),
        (2, Player::X),
        (4, Player::O),
        (3, Player::X),
        (5, Player::O),
        (7, Player::X),
        (6, Player::O),
    ] {
        board.place(position, player).unwrap();
    }

    assert!(!board.is_full());
    assert_eq!(board.status(), Status::Draw);
}

#[test]
fn larger_board_win_detection() {
    let mut board = Board::new(5).unwrap();
    for col in 0..5 {
        assert_eq!(board.status(), Status::InProgress);
        board.place_at(2, col, Player::O).unwrap();
    }
    assert_eq!(board.status(), Status::Won(Player::O));
}
