//! Time-travel game state: an ordered history of board snapshots and a
//! pointer to the one currently shown.

use crate::error::HistoryError;
use crate::invariants::assert_invariants;
use crate::rules::check_winner;
use crate::{Board, Player, Position, Square};
use tracing::{debug, info, instrument};

/// Why a move was ignored.
///
/// Rejected moves are silent no-ops for the player; the reason exists for
/// logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),
    /// The shown board already has a winner.
    #[display("Game already won by {}", _0)]
    GameOver(Player),
}

/// Result of [`GameState::play_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayResult {
    /// The mark was placed and became the latest snapshot.
    Played {
        /// Player who moved.
        player: Player,
        /// Where the mark went.
        position: Position,
    },
    /// Nothing changed.
    Rejected(Rejection),
}

impl PlayResult {
    /// Whether the move changed the game.
    pub fn is_played(&self) -> bool {
        matches!(self, PlayResult::Played { .. })
    }
}

/// Single source of truth for a game's temporal state.
///
/// `history[0]` is always the empty board and `current_move` always indexes
/// into `history`. Playing from an earlier move discards the snapshots after
/// it before appending the new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<Board>,
    current_move: usize,
}

impl GameState {
    /// Creates a new game with a single empty snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<Board>, current_move: usize) -> Self {
        Self {
            history,
            current_move,
        }
    }

    /// Places the mover's mark at `pos` on the shown board.
    ///
    /// Ignored when the square is taken or the shown board is already won.
    /// Otherwise every snapshot after the current one is discarded, the new
    /// board is appended, and it becomes the current move.
    #[instrument(skip(self), fields(current_move = self.current_move, len = self.history.len()))]
    pub fn play_move(&mut self, pos: Position) -> PlayResult {
        let board = self.current_board();

        if !board.is_empty(pos) {
            debug!(?pos, "Ignoring move on occupied square");
            return PlayResult::Rejected(Rejection::Occupied(pos));
        }
        if let Some(winner) = check_winner(&board) {
            debug!(%winner, "Ignoring move after win");
            return PlayResult::Rejected(Rejection::GameOver(winner));
        }

        let player = self.next_player();
        let next = board.with(pos, Square::Occupied(player));

        let discarded = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        info!(
            %player,
            position = %pos,
            current_move = self.current_move,
            discarded,
            "Move played"
        );
        assert_invariants(self);

        PlayResult::Played {
            player,
            position: pos,
        }
    }

    /// Shows snapshot `move_index` without altering the history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::MoveOutOfRange`] if `move_index` is not a
    /// valid history index; the state is left unchanged.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), HistoryError> {
        if move_index >= self.history.len() {
            return Err(HistoryError::MoveOutOfRange {
                requested: move_index,
                len: self.history.len(),
            });
        }
        self.current_move = move_index;
        info!(current_move = move_index, "Jumped to move");
        Ok(())
    }

    /// The board at the current move.
    pub fn current_board(&self) -> Board {
        self.history[self.current_move]
    }

    /// Whether X moves next.
    pub fn is_x_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// The player who moves next from the current board.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Winner of the current board, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(&self.current_board())
    }

    /// Index of the shown snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of snapshots (always at least one).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false; present for API symmetry with [`GameState::len`].
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Whether the current move is the latest snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.current_move + 1 == self.history.len()
    }

    /// Snapshot at `index`, if it exists.
    pub fn snapshot(&self, index: usize) -> Option<&Board> {
        self.history.get(index)
    }

    /// The square filled by move `index` (`None` for the game start or an
    /// out-of-range index).
    pub fn last_move(&self, index: usize) -> Option<Position> {
        let prev = self.snapshot(index.checked_sub(1)?)?;
        let board = self.snapshot(index)?;
        board.diff(prev).first().copied()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.len(), 1);
        assert_eq!(state.current_move(), 0);
        assert_eq!(state.current_board(), Board::new());
        assert!(state.is_x_next());
        assert!(state.is_at_latest());
    }

    #[test]
    fn test_play_appends_and_advances() {
        let mut state = GameState::new();
        let result = state.play_move(Position::Center);
        assert_eq!(
            result,
            PlayResult::Played {
                player: Player::X,
                position: Position::Center
            }
        );
        assert_eq!(state.len(), 2);
        assert_eq!(state.current_move(), 1);
        assert!(!state.is_x_next());
        assert_eq!(state.last_move(1), Some(Position::Center));
        assert_eq!(state.last_move(0), None);
        assert_eq!(state.snapshot(0), Some(&Board::new()));
        assert_eq!(state.snapshot(2), None);
    }

    #[test]
    fn test_occupied_square_is_noop() {
        let mut state = GameState::new();
        state.play_move(Position::Center);
        let before = state.clone();
        let result = state.play_move(Position::Center);
        assert_eq!(result, PlayResult::Rejected(Rejection::Occupied(Position::Center)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_jump_out_of_range_leaves_state() {
        let mut state = GameState::new();
        state.play_move(Position::Center);
        let before = state.clone();
        assert_eq!(
            state.jump_to(2),
            Err(HistoryError::MoveOutOfRange {
                requested: 2,
                len: 2
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_play_from_past_truncates() {
        let mut state = GameState::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            state.play_move(pos);
        }
        state.jump_to(1).unwrap();
        assert!(!state.is_at_latest());
        state.play_move(Position::BottomLeft);
        assert_eq!(state.len(), 3);
        assert_eq!(state.current_move(), 2);
        assert_eq!(state.last_move(2), Some(Position::BottomLeft));
    }

    #[test]
    fn test_replay_same_square_after_jump_back() {
        let mut state = GameState::new();
        state.play_move(Position::TopLeft);
        state.jump_to(0).unwrap();
        assert!(state.play_move(Position::TopLeft).is_played());
        assert_eq!(state.len(), 2);
    }
}
