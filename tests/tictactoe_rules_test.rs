//! Tests for board evaluation and turn order.

use strictly_console::{Board, CellState, Coordinate, GameSession, GameStatus, Mark};

fn at(column: i64, row: i64) -> Coordinate {
    Coordinate::new(column, row, 3).unwrap()
}

fn loaded(notation: &str) -> GameSession {
    GameSession::with_board(notation.parse().unwrap(), 3, Mark::X)
}

#[test]
fn test_empty_board_in_progress() {
    assert_eq!(GameSession::new(3, 3).unwrap().status(), GameStatus::InProgress);
}

#[test]
fn test_lopsided_boards_are_impossible() {
    for notation in ["XX_______", "XXX______", "OO_______", "XXXXOO___", "OOOX_____"] {
        assert_eq!(loaded(notation).status(), GameStatus::Impossible, "{notation}");
    }
}

#[test]
fn test_top_row_win() {
    let session = loaded("XXXOO____");
    assert!(session.board().has_run(3, Mark::X));
    assert_eq!(session.status(), GameStatus::XWins);
}

#[test]
fn test_top_row_alone_fails_count_check() {
    // Three X's against zero O's differ by more than one.
    assert_eq!(loaded("XXX______").status(), GameStatus::Impossible);
}

#[test]
fn test_full_board_without_line_is_draw() {
    assert_eq!(loaded("OXOXXOXOX").status(), GameStatus::Draw);
}

#[test]
fn test_both_diagonals_won_is_impossible() {
    // The diagonals of a 3×3 board share the centre, so use 4×4.
    let board = Board::from_cells(
        "O__X\
         _OX_\
         _XO_\
         X__O",
        4,
    )
    .unwrap();
    let session = GameSession::with_board(board, 4, Mark::X);
    assert!(session.board().has_run(4, Mark::X));
    assert!(session.board().has_run(4, Mark::O));
    assert_eq!(session.status(), GameStatus::Impossible);
}

#[test]
fn test_non_contiguous_marks_count_toward_run() {
    // Top row of a 4×4 board: X O X X. No three adjacent X's, yet three
    // X's share the row, which meets a required run of 3.
    let board = Board::from_cells("XOXXO_O_________", 4).unwrap();
    assert!(board.has_run(3, Mark::X));

    let session = GameSession::with_board(board, 3, Mark::O);
    assert_eq!(session.status(), GameStatus::XWins);
}

#[test]
fn test_alternation_keeps_counts_balanced() {
    let mut session = GameSession::new(3, 3).unwrap();
    let moves = [(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (2, 2), (1, 3), (3, 3)];
    for (column, row) in moves {
        session.apply_move(at(column, row)).unwrap();
        let x = session.board().count(CellState::Occupied(Mark::X));
        let o = session.board().count(CellState::Occupied(Mark::O));
        assert!(x.abs_diff(o) <= 1);
    }
}

#[test]
fn test_status_idempotent() {
    let session = loaded("XOX_O_X__");
    let first = session.status();
    assert_eq!(session.status(), first);
    assert_eq!(session.status(), first);
}

#[test]
fn test_coordinate_bounds() {
    assert!(Coordinate::new(1, 1, 3).is_ok());
    assert!(Coordinate::new(3, 3, 3).is_ok());
    assert!(Coordinate::new(0, 1, 3).is_err());
    assert!(Coordinate::new(4, 2, 3).is_err());
}

#[test]
fn test_game_played_to_win() {
    let mut session = GameSession::new(3, 3).unwrap();
    // X: (1,1) (2,2) (3,3); O: (2,1) (3,1)
    for (column, row) in [(1, 1), (2, 1), (2, 2), (3, 1)] {
        session.apply_move(at(column, row)).unwrap();
        assert_eq!(session.status(), GameStatus::InProgress);
    }
    session.apply_move(at(3, 3)).unwrap();
    assert_eq!(session.status(), GameStatus::XWins);
}
