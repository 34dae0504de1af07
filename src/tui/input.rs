//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Moves the board cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col + 1),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Moves the history cursor up or down within `len` rows.
pub fn move_history_cursor(row: usize, len: usize, key: KeyCode) -> usize {
    match key {
        KeyCode::Up => row.saturating_sub(1),
        KeyCode::Down => (row + 1).min(len.saturating_sub(1)),
        KeyCode::PageUp => row.saturating_sub(5),
        KeyCode::PageDown => (row + 5).min(len.saturating_sub(1)),
        _ => row,
    }
}
