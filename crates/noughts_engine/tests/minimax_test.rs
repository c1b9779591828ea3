//! Tests for strategy move choice and strength.

use noughts_engine::{
    Board, GameResult, Mark, MinimaxStrategy, Position, RandomStrategy, Strategy, StrategyKind,
    play_round,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn minimax(mark: Mark, seed: u64) -> MinimaxStrategy {
    MinimaxStrategy::with_rng(mark, StdRng::seed_from_u64(seed))
}

fn random(mark: Mark, seed: u64) -> RandomStrategy {
    RandomStrategy::with_rng(mark, StdRng::seed_from_u64(seed))
}

#[test]
fn test_answers_center_with_corner() {
    let board: Board = "... / .X. / ...".parse().unwrap();
    let choice = minimax(Mark::O, 1).select_move(&board).unwrap();
    let position = Position::from_index(choice).unwrap();
    assert!(position.is_corner(), "chose {}", position);
    assert!(!position.is_edge());
}

#[test]
fn test_completes_row_to_win() {
    let board: Board = "XX. / OO. / ...".parse().unwrap();
    assert_eq!(minimax(Mark::X, 2).select_move(&board), Some(2));
}

#[test]
fn test_same_board_same_move() {
    let board: Board = "X.. / .O. / ..X".parse().unwrap();
    let first = minimax(Mark::O, 3).select_move(&board);
    for seed in 4..10 {
        assert_eq!(minimax(Mark::O, seed).select_move(&board), first);
    }
}

#[test]
fn test_opening_move_is_random() {
    let board = Board::new();
    let mut strategy = minimax(Mark::X, 5);
    let mut seen = [false; 9];
    for _ in 0..200 {
        seen[strategy.select_move(&board).unwrap()] = true;
    }
    assert!(seen.iter().filter(|s| **s).count() > 1);
}

#[test]
fn test_minimax_against_itself_always_draws() {
    for seed in 0..9 {
        for first in [Mark::X, Mark::O] {
            let mut a = minimax(first, seed);
            let mut b = minimax(first.opponent(), seed + 100);
            assert_eq!(play_round(&mut a, &mut b), GameResult::Draw);
        }
    }
}

#[test]
fn test_minimax_never_loses_to_random() {
    for seed in 0..15 {
        // Minimax opens.
        let mut ai = minimax(Mark::X, seed);
        let mut opponent = random(Mark::O, seed + 1_000);
        let result = play_round(&mut ai, &mut opponent);
        assert_ne!(result, GameResult::Won(Mark::O), "seed {}", seed);

        // Minimax replies.
        let mut ai = minimax(Mark::O, seed);
        let mut opponent = random(Mark::X, seed + 2_000);
        let result = play_round(&mut opponent, &mut ai);
        assert_ne!(result, GameResult::Won(Mark::X), "seed {}", seed);
    }
}

#[test]
fn test_boxed_strategies_play_through_trait() {
    let mut x = StrategyKind::Minimax.build(Mark::X, 8);
    let mut o = StrategyKind::Random.build(Mark::O, 9);
    let result = play_round(x.as_mut(), o.as_mut());
    assert_ne!(result, GameResult::Won(Mark::O));
}
