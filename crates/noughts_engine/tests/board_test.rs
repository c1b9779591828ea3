//! Tests for board queries and apply/undo.

use std::collections::HashSet;

use noughts_engine::rules::LINES;
use noughts_engine::{Board, CELLS, GameResult, Mark, Square};

/// Collects every distinct position reachable by legal play from the empty board.
fn reachable() -> Vec<Board> {
    fn walk(board: &mut Board, to_move: Mark, seen: &mut HashSet<Board>) {
        if !seen.insert(*board) || board.result().is_terminal() {
            return;
        }
        for index in board.available_moves() {
            board.apply_move(index, to_move);
            walk(board, to_move.opponent(), seen);
            board.undo_move(index);
        }
    }

    let mut seen = HashSet::new();
    walk(&mut Board::new(), Mark::X, &mut seen);
    seen.into_iter().collect()
}

#[test]
fn test_empty_board_has_no_winner() {
    let board = Board::new();
    assert!(!board.check_winner(Mark::X));
    assert!(!board.check_winner(Mark::O));
    assert_eq!(board.result(), GameResult::InProgress);
}

#[test]
fn test_check_winner_matches_line_definition() {
    let boards = reachable();
    assert_eq!(boards.len(), 5478);
    for board in &boards {
        for mark in [Mark::X, Mark::O] {
            let expected = LINES.iter().any(|line| {
                line.iter()
                    .all(|&i| board.get(i) == Some(Square::Occupied(mark)))
            });
            assert_eq!(board.check_winner(mark), expected, "board:\n{}", board);
        }
    }
}

#[test]
fn test_apply_then_undo_restores_board() {
    for board in reachable().iter().filter(|b| !b.result().is_terminal()) {
        for index in board.available_moves() {
            for mark in [Mark::X, Mark::O] {
                let mut trial = *board;
                assert!(trial.apply_move(index, mark));
                trial.undo_move(index);
                assert_eq!(&trial, board);
                assert_eq!(trial.empty_count(), board.empty_count());
            }
        }
    }
}

#[test]
fn test_available_plus_occupied_is_nine() {
    for board in &reachable() {
        assert_eq!(board.available_moves().len() + board.occupied_count(), CELLS);
    }
}

#[test]
fn test_available_moves_ascending() {
    let board: Board = "X.O / ..X / O..".parse().unwrap();
    assert_eq!(board.available_moves(), vec![1, 3, 4, 7, 8]);
}

#[test]
fn test_win_with_one_square_left_is_not_draw() {
    let board: Board = "XOX / OXO / O.X".parse().unwrap();
    assert!(!board.is_full());
    assert!(board.check_winner(Mark::X));
    assert_eq!(board.empty_count(), 1);
    assert_eq!(board.result(), GameResult::Won(Mark::X));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board: Board = "XOX / XOO / OXX".parse().unwrap();
    assert!(board.is_full());
    assert_eq!(board.result(), GameResult::Draw);
}
