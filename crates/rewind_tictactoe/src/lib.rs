//! Tic-tac-toe with a time-travel move history.
//!
//! A [`GameState`] keeps every board snapshot of the game together with
//! the index of the one being shown. Moves are played on the shown board;
//! playing from an earlier point discards the snapshots after it.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Position, status_text};
//!
//! let mut game = GameState::new();
//! game.play_move(Position::TopLeft);
//! game.play_move(Position::Center);
//! game.jump_to(1)?;
//! game.play_move(Position::TopCenter);
//!
//! assert_eq!(game.len(), 3);
//! assert_eq!(status_text(&game.current_board(), game.is_x_next()), "Next player: X");
//! # Ok::<(), rewind_tictactoe::HistoryError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod status;
mod types;
mod view;

pub use error::HistoryError;
pub use history::{GameState, PlayResult, Rejection};
pub use position::Position;
pub use rules::{WinningLine, check_winner, winning_line};
pub use session::{GameObserver, GameSession};
pub use status::{GAME_START_LABEL, move_label, status_text};
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveEntry};
