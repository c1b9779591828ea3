//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use noughts_engine::Position;

/// Moves the cursor one square with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => return cursor,
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps number keys 1-9 to board indices 0-8.
pub fn digit_to_index(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(digit @ 1..=9) => Some(digit as usize - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Enter), Position::BottomLeft);
    }

    #[test]
    fn test_digits_map_to_indices() {
        assert_eq!(digit_to_index('1'), Some(0));
        assert_eq!(digit_to_index('9'), Some(8));
        assert_eq!(digit_to_index('0'), None);
        assert_eq!(digit_to_index('a'), None);
    }
}
