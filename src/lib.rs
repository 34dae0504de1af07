//! Rewind - terminal tic-tac-toe with a time-travel move history.
//!
//! # Architecture
//!
//! - **Game**: board, winner check and history live in [`rewind_tictactoe`]
//! - **TUI**: ratatui board view and history list, driven by mouse and keys
//! - **Replay**: headless scripted games for quick checks and piping
//! - **Settings**: optional TOML file
//!
//! # Example
//!
//! ```
//! use rewind::{parse_script, render_text, run_script};
//!
//! let session = run_script(&parse_script("0 3 1 4 2")?)?;
//! assert_eq!(session.view().status(), "Winner: X");
//! println!("{}", render_text(&session.view(), true));
//! # Ok::<(), rewind::ScriptError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod history_list;
mod replay;
mod settings;
mod tui;

pub use cli::{Cli, Command};
pub use history_list::{display_order, entry_text, row_of, visible_window};
pub use replay::{ScriptError, ScriptStep, parse_script, render_text, run_script};
pub use settings::{ConfigError, HistoryOrder, Settings};
pub use tui::{App, Focus, ScreenLayout, draw, run_tui};

pub use rewind_tictactoe::{
    Board, GameSession, GameState, GameView, HistoryError, MoveEntry, PlayResult, Player, Position,
    Square,
};
