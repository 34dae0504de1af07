//! Presentation of the move history as an ordered, scrollable list.

use crate::settings::HistoryOrder;
use rewind_tictactoe::MoveEntry;
use std::ops::Range;

/// History indices in the order they are listed.
pub fn display_order(len: usize, order: HistoryOrder) -> Vec<usize> {
    match order {
        HistoryOrder::Ascending => (0..len).collect(),
        HistoryOrder::Descending => (0..len).rev().collect(),
    }
}

/// List row at which history `index` is shown.
pub fn row_of(index: usize, len: usize, order: HistoryOrder) -> usize {
    match order {
        HistoryOrder::Ascending => index,
        HistoryOrder::Descending => len.saturating_sub(1).saturating_sub(index),
    }
}

/// Rows visible in a list of `height` rows so that `selected` stays in view.
///
/// The window starts at the top and scrolls only once `selected` would fall
/// below the last row.
pub fn visible_window(total: usize, selected: usize, height: usize) -> Range<usize> {
    if height == 0 {
        return 0..0;
    }
    let start = (selected + 1).saturating_sub(height);
    start..total.min(start + height)
}

/// Text of one history entry.
///
/// Locations are shown one-based, e.g. `Go to move #3 (2, 1)`.
pub fn entry_text(entry: &MoveEntry, show_locations: bool) -> String {
    match entry.location() {
        Some((row, col)) if show_locations => {
            format!("{} ({}, {})", entry.label(), row + 1, col + 1)
        }
        _ => entry.label().clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order() {
        assert_eq!(display_order(3, HistoryOrder::Ascending), vec![0, 1, 2]);
        assert_eq!(display_order(3, HistoryOrder::Descending), vec![2, 1, 0]);
    }

    #[test]
    fn test_row_of_matches_display_order() {
        for order in [HistoryOrder::Ascending, HistoryOrder::Descending] {
            for (row, index) in display_order(5, order).into_iter().enumerate() {
                assert_eq!(row_of(index, 5, order), row);
            }
        }
    }

    #[test]
    fn test_visible_window_scrolls_with_selection() {
        assert_eq!(visible_window(10, 0, 4), 0..4);
        assert_eq!(visible_window(10, 3, 4), 0..4);
        assert_eq!(visible_window(10, 4, 4), 1..5);
        assert_eq!(visible_window(10, 9, 4), 6..10);
        assert_eq!(visible_window(2, 1, 4), 0..2);
        assert_eq!(visible_window(2, 1, 0), 0..0);
    }

    #[test]
    fn test_entry_text() {
        let start = MoveEntry::new(0, "Go to game start".to_string(), None, true);
        let third = MoveEntry::new(3, "Go to move #3".to_string(), Some((1, 0)), false);
        assert_eq!(entry_text(&start, true), "Go to game start");
        assert_eq!(entry_text(&third, true), "Go to move #3 (2, 1)");
        assert_eq!(entry_text(&third, false), "Go to move #3");
    }
}
