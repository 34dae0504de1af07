//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). There is deliberately no
//! draw rule: a full board without a winner is not a distinct state.

pub mod win;

pub use win::{LINES, WinningLine, check_winner, winning_line};
