//! Immutable, serializable snapshot of everything a renderer shows.

use crate::rules::{WinningLine, winning_line};
use crate::status::{move_label, status_text};
use crate::{GameState, Player, Square};
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use tracing::instrument;

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    index: usize,
    /// Button text.
    label: String,
    /// Zero-based (row, col) of the mark placed by this move.
    location: Option<(usize, usize)>,
    /// Whether this is the move currently shown.
    is_current: bool,
}

/// Read-only view of a game handed to renderers by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// Squares of the current board, row-major.
    squares: [Square; 9],
    /// Status line text.
    status: String,
    /// Player to move from the current board.
    next_player: Player,
    /// Winner of the current board.
    winner: Option<Player>,
    /// The completed line on the current board.
    winning_line: Option<WinningLine>,
    /// Index of the shown snapshot.
    current_move: usize,
    /// One entry per snapshot, oldest first.
    moves: Vec<MoveEntry>,
}

impl GameView {
    /// Builds the view for the state's current move.
    #[instrument(skip(state), fields(current_move = state.current_move()))]
    pub fn from_state(state: &GameState) -> Self {
        let board = state.current_board();
        let line = winning_line(&board);
        let moves = (0..state.len())
            .map(|index| {
                MoveEntry::new(
                    index,
                    move_label(index),
                    state.last_move(index).map(|pos| (pos.row(), pos.col())),
                    index == state.current_move(),
                )
            })
            .collect();

        Self {
            squares: *board.squares(),
            status: status_text(&board, state.is_x_next()),
            next_player: state.next_player(),
            winner: line.map(|l| l.player),
            winning_line: line,
            current_move: state.current_move(),
            moves,
        }
    }
}

impl From<&GameState> for GameView {
    fn from(state: &GameState) -> Self {
        Self::from_state(state)
    }
}
