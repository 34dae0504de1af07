//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are checked in debug builds and are testable independently.

use crate::{Board, GameState, Player, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violation: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: history starts from an empty board and is never empty.
pub struct StartsEmptyInvariant;

impl Invariant<GameState> for StartsEmptyInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History begins with an empty board"
    }
}

/// Invariant: the current move points into the history.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.current_move() < state.history().len()
    }

    fn description() -> &'static str {
        "Current move is within the history"
    }
}

/// Invariant: each snapshot adds exactly one mark, alternating X then O.
pub struct SingleStepInvariant;

impl Invariant<GameState> for SingleStepInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| match pair[1].diff(&pair[0]).as_slice() {
                [pos] => {
                    pair[0].get(*pos) == Square::Empty
                        && pair[1].get(*pos) == Square::Occupied(Player::for_move(i))
                }
                _ => false,
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds one mark for the player to move"
    }
}

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    StartsEmptyInvariant,
    CursorInBoundsInvariant,
    SingleStepInvariant,
);

/// Asserts all history invariants in debug builds.
pub(crate) fn assert_invariants(state: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = HistoryInvariants::check_all(state)
    {
        tracing::error!(?violations, "History invariants violated");
        panic!("History invariants violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_new_game_holds() {
        assert!(HistoryInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_holds_after_moves_and_jumps() {
        let mut state = GameState::new();
        state.play_move(Position::Center);
        state.play_move(Position::TopLeft);
        state.jump_to(1).unwrap();
        state.play_move(Position::BottomRight);
        assert!(HistoryInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_detects_two_marks_in_one_step() {
        let first = Board::new();
        let second = first
            .with(Position::Center, Square::Occupied(Player::X))
            .with(Position::TopLeft, Square::Occupied(Player::O));
        let state = GameState::from_parts(vec![first, second], 1);
        assert!(!SingleStepInvariant::holds(&state));
        assert!(StartsEmptyInvariant::holds(&state));
    }

    #[test]
    fn test_detects_wrong_mover() {
        let first = Board::new();
        let second = first.with(Position::Center, Square::Occupied(Player::O));
        let state = GameState::from_parts(vec![first, second], 1);
        assert!(!SingleStepInvariant::holds(&state));
    }

    #[test]
    fn test_detects_cursor_out_of_bounds() {
        let state = GameState::from_parts(vec![Board::new()], 3);
        let violations = HistoryInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, CursorInBoundsInvariant::description());
    }
}
