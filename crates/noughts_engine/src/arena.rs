//! Headless rounds between two strategies.

use tracing::{debug, instrument};

use crate::board::Board;
use crate::strategy::Strategy;
use crate::types::GameResult;

/// Plays one round to completion; `first` moves first.
///
/// # Panics
///
/// Panics if both strategies play the same mark, or if a strategy picks a
/// square that is not available.
#[instrument(skip_all, fields(first = %first.mark(), second = %second.mark()))]
pub fn play_round<'a>(first: &'a mut dyn Strategy, second: &'a mut dyn Strategy) -> GameResult {
    assert_ne!(first.mark(), second.mark(), "strategies must play opposite marks");

    let mut board = Board::new();
    let mut players = [first, second];
    let mut turn = 0;

    loop {
        let result = board.result();
        if result.is_terminal() {
            debug!(%result, moves = board.occupied_count(), "Round finished");
            return result;
        }

        let player = &mut players[turn % 2];
        let mark = player.mark();
        let index = player
            .select_move(&board)
            .unwrap_or_else(|| panic!("{} strategy found no move on a live board", player.kind()));
        assert!(
            board.apply_move(index, mark),
            "{} strategy chose unavailable square {}",
            player.kind(),
            index
        );
        turn += 1;
    }
}
