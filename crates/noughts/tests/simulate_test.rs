//! Tests for headless strategy-versus-strategy play.

use noughts::{Tally, run_simulation};
use noughts_engine::{GameResult, Mark, StrategyKind};

#[test]
fn test_minimax_never_loses_to_random() {
    let as_first = run_simulation(40, StrategyKind::Minimax, StrategyKind::Random, Some(11));
    assert_eq!(as_first.games(), 40);
    assert_eq!(as_first.second_wins, 0);

    let as_second = run_simulation(40, StrategyKind::Random, StrategyKind::Minimax, Some(12));
    assert_eq!(as_second.games(), 40);
    assert_eq!(as_second.first_wins, 0);
}

#[test]
fn test_minimax_mirror_always_draws() {
    let tally = run_simulation(10, StrategyKind::Minimax, StrategyKind::Minimax, Some(3));
    assert_eq!(tally.draws, 10);
}

#[test]
fn test_seeded_simulation_is_reproducible() {
    let a = run_simulation(25, StrategyKind::Random, StrategyKind::Random, Some(99));
    let b = run_simulation(25, StrategyKind::Random, StrategyKind::Random, Some(99));
    assert_eq!(a, b);
}

#[test]
fn test_tally_display() {
    let mut tally = Tally::default();
    tally.record(GameResult::Won(Mark::X));
    tally.record(GameResult::Draw);
    tally.record(GameResult::InProgress);
    assert_eq!(
        tally.to_string(),
        "2 games - first (X) wins: 1, second (O) wins: 0, draws: 1"
    );
}
