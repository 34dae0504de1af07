//! Game session: the game state plus explicit change notification.
//!
//! Renderers register a [`GameObserver`]; after every operation that
//! actually changes the state, each observer receives a fresh [`GameView`].

use crate::error::HistoryError;
use crate::history::{GameState, PlayResult};
use crate::view::GameView;
use crate::Position;
use tracing::{debug, instrument};

/// Receives a view of the game after every state change.
pub trait GameObserver {
    /// Called once per accepted transition.
    fn on_change(&mut self, view: &GameView);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameView),
{
    fn on_change(&mut self, view: &GameView) {
        self(view)
    }
}

/// A game plus the observers interested in it.
#[derive(Default)]
pub struct GameSession {
    state: GameState,
    observers: Vec<Box<dyn GameObserver>>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl GameSession {
    /// Creates a session with a fresh game and no observers.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The underlying game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// View of the current move.
    pub fn view(&self) -> GameView {
        GameView::from_state(&self.state)
    }

    /// Plays `pos`, notifying observers if the move was accepted.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) -> PlayResult {
        let result = self.state.play_move(pos);
        if result.is_played() {
            self.notify();
        }
        result
    }

    /// Jumps to `move_index`, notifying observers if the shown move changed.
    ///
    /// # Errors
    ///
    /// Propagates [`HistoryError`] for an out-of-range index.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), HistoryError> {
        let before = self.state.current_move();
        self.state.jump_to(move_index)?;
        if before != move_index {
            self.notify();
        }
        Ok(())
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let view = self.view();
        debug!(observers = self.observers.len(), "Notifying observers");
        for observer in &mut self.observers {
            observer.on_change(&view);
        }
    }
}
