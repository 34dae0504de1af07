//! Status text and move-list labels.
//!
//! Derived from the board on demand, never stored.

use crate::rules::check_winner;
use crate::{Board, Player};

/// Label of the history entry that returns to the empty board.
pub const GAME_START_LABEL: &str = "Go to game start";

/// Status line for `board`.
///
/// `"Winner: X"` once a line is complete, otherwise `"Next player: X"`.
/// A full board with no winner still reports the next player.
pub fn status_text(board: &Board, x_is_next: bool) -> String {
    match check_winner(board) {
        Some(winner) => format!("Winner: {}", winner),
        None => format!("Next player: {}", if x_is_next { Player::X } else { Player::O }),
    }
}

/// Label for history entry `index`.
pub fn move_label(index: usize) -> String {
    if index == 0 {
        GAME_START_LABEL.to_string()
    } else {
        format!("Go to move #{}", index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_next_player_status() {
        assert_eq!(status_text(&Board::new(), true), "Next player: X");
        assert_eq!(status_text(&Board::new(), false), "Next player: O");
    }

    #[test]
    fn test_winner_status_ignores_turn() {
        let board = [Position::TopLeft, Position::Center, Position::BottomRight]
            .iter()
            .fold(Board::new(), |b, p| b.with(*p, Square::Occupied(Player::O)));
        assert_eq!(status_text(&board, true), "Winner: O");
        assert_eq!(status_text(&board, false), "Winner: O");
    }

    // A full board without a winner has no draw message.
    #[test]
    fn test_full_board_without_winner_reports_next_player() {
        use Player::{O, X};
        let marks = [X, O, X, X, O, O, O, X, X];
        let mut squares = [Square::Empty; 9];
        for (square, mark) in squares.iter_mut().zip(marks) {
            *square = Square::Occupied(mark);
        }
        let board = Board::from_squares(squares);
        assert_eq!(check_winner(&board), None);
        assert_eq!(status_text(&board, false), "Next player: O");
    }

    #[test]
    fn test_move_labels() {
        assert_eq!(move_label(0), "Go to game start");
        assert_eq!(move_label(1), "Go to move #1");
        assert_eq!(move_label(9), "Go to move #9");
    }
}
