//! Headless replay of a scripted sequence of moves and jumps.
//!
//! A script is a list of tokens separated by whitespace or commas:
//! `0`-`8` or a cell label such as `center` or `top-left` plays that
//! cell, `@k` jumps to history entry `k`.

use crate::history_list::entry_text;
use derive_more::{Display, Error};
use rewind_tictactoe::{Board, GameSession, GameView, HistoryError, Position};
use tracing::{debug, info, instrument};

/// One step of a replay script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    /// Play a cell.
    Play(Position),
    /// Jump to a history entry.
    Jump(usize),
}

/// Error raised while parsing or running a script.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ScriptError {
    /// Token is neither a cell nor a jump.
    #[display("Invalid script token {:?}", token)]
    InvalidToken {
        /// The offending token.
        token: String,
    },
    /// Cell index outside 0-8.
    #[display("Cell {} is out of range (0-8)", index)]
    CellOutOfRange {
        /// The offending index.
        index: usize,
    },
    /// A jump named a move that does not exist.
    #[display("{}", source)]
    History {
        /// Underlying history error.
        source: HistoryError,
    },
}

impl From<HistoryError> for ScriptError {
    fn from(source: HistoryError) -> Self {
        Self::History { source }
    }
}

/// Parses a script into steps.
#[instrument]
pub fn parse_script(script: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect()
}

fn parse_token(token: &str) -> Result<ScriptStep, ScriptError> {
    let invalid = || ScriptError::InvalidToken {
        token: token.to_string(),
    };

    if let Some(jump) = token.strip_prefix('@') {
        return jump.parse().map(ScriptStep::Jump).map_err(|_| invalid());
    }

    if let Ok(index) = token.parse::<usize>() {
        return Position::from_index(index)
            .map(ScriptStep::Play)
            .ok_or(ScriptError::CellOutOfRange { index });
    }

    Position::from_label_or_number(token)
        .map(ScriptStep::Play)
        .ok_or_else(invalid)
}

/// Runs steps against a fresh session.
///
/// Rejected plays are skipped exactly as the interactive board ignores them.
#[instrument(skip(steps), fields(steps = steps.len()))]
pub fn run_script(steps: &[ScriptStep]) -> Result<GameSession, ScriptError> {
    let mut session = GameSession::new();
    for step in steps {
        match *step {
            ScriptStep::Play(pos) => {
                let result = session.play(pos);
                debug!(?pos, ?result, "Replayed play");
            }
            ScriptStep::Jump(index) => session.jump_to(index)?,
        }
    }
    info!(
        current_move = session.state().current_move(),
        len = session.state().len(),
        "Replay finished"
    );
    Ok(session)
}

/// Renders a view as plain text: board, status, then the history with a
/// `>` marker on the current move.
pub fn render_text(view: &GameView, show_locations: bool) -> String {
    let board = Board::from_squares(*view.squares());
    let mut out = format!("{}\n\n{}\n\n", board.display(), view.status());
    for entry in view.moves() {
        let marker = if *entry.is_current() { '>' } else { ' ' };
        out.push_str(&format!(
            "{} {}\n",
            marker,
            entry_text(entry, show_locations)
        ));
    }
    out
}
