//! Application state and input handling.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use rewind_tictactoe::{GameSession, GameView, Position};
use std::cell::Cell;
use std::ops::Range;
use std::rc::Rc;
use tracing::{debug, instrument, warn};

use super::input::{move_cursor, move_history_cursor};
use super::ui::ScreenLayout;
use crate::history_list::{display_order, row_of, visible_window};
use crate::settings::{HistoryOrder, Settings};

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move history list.
    History,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// Main application state.
///
/// The game itself lives in a [`GameSession`]; an observer registered on it
/// marks the screen dirty after every accepted move or jump.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    settings: Settings,
    cursor: Position,
    focus: Focus,
    order: HistoryOrder,
    history_cursor: usize,
    area: Rect,
    dirty: Rc<Cell<bool>>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip(settings))]
    pub fn new(settings: Settings) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let mut session = GameSession::new();
        let flag = Rc::clone(&dirty);
        session.subscribe(move |view: &GameView| {
            debug!(current_move = view.current_move(), "Game changed");
            flag.set(true);
        });

        Self {
            session,
            order: *settings.history_order(),
            settings,
            cursor: Position::Center,
            focus: Focus::Board,
            history_cursor: 0,
            area: Rect::default(),
            dirty,
            should_quit: false,
        }
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Current history order.
    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    /// Highlighted row of the history list.
    pub fn history_cursor(&self) -> usize {
        self.history_cursor
    }

    /// History rows visible in a list `height` rows tall, keeping the
    /// highlighted row in view.
    pub fn history_window(&self, height: usize) -> Range<usize> {
        visible_window(self.session.state().len(), self.history_cursor, height)
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns whether a redraw is needed and clears the flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Records the terminal area used for mouse hit-testing.
    pub fn resize(&mut self, area: Rect) {
        if area != self.area {
            debug!(width = area.width, height = area.height, "Terminal resized");
            self.area = area;
            self.dirty.set(true);
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        // crossterm reports releases on some platforms.
        if key.kind == KeyEventKind::Release {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.dirty.set(true);
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.toggle_order(),
            KeyCode::Home => self.jump(0),
            KeyCode::End => self.jump(self.session.state().len() - 1),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = c
                    .to_digit(10)
                    .and_then(|d| Position::from_index(d as usize - 1))
                {
                    if self.cursor != pos {
                        self.cursor = pos;
                        self.dirty.set(true);
                    }
                    self.play(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::History => self.jump(self.index_at_row(self.history_cursor)),
            },
            code @ (KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::PageUp
            | KeyCode::PageDown) => {
                match self.focus {
                    Focus::Board => self.cursor = move_cursor(self.cursor, code),
                    Focus::History => {
                        self.history_cursor = move_history_cursor(
                            self.history_cursor,
                            self.session.state().len(),
                            code,
                        )
                    }
                }
                self.dirty.set(true);
            }
            _ => {}
        }
    }

    /// Handles a mouse event: left clicks play squares or jump in history.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let layout = ScreenLayout::new(self.area);
        if let Some(pos) = layout.cell_at(mouse.column, mouse.row) {
            self.focus = Focus::Board;
            self.cursor = pos;
            self.dirty.set(true);
            self.play(pos);
        } else if let Some(offset) = layout.history_row_at(mouse.column, mouse.row) {
            let window = self.history_window(layout.history_rows.height as usize);
            let row = window.start + offset;
            if row < window.end {
                self.focus = Focus::History;
                self.dirty.set(true);
                self.jump(self.index_at_row(row));
            }
        }
    }

    fn play(&mut self, pos: Position) {
        let result = self.session.play(pos);
        debug!(?pos, ?result, "Play requested");
        self.sync_history_cursor();
    }

    fn jump(&mut self, index: usize) {
        if let Err(e) = self.session.jump_to(index) {
            warn!(error = %e, "Ignoring jump");
        }
        self.sync_history_cursor();
    }

    fn toggle_order(&mut self) {
        self.order = self.order.toggle();
        self.sync_history_cursor();
        self.dirty.set(true);
    }

    fn index_at_row(&self, row: usize) -> usize {
        display_order(self.session.state().len(), self.order)[row]
    }

    fn sync_history_cursor(&mut self) {
        let state = self.session.state();
        self.history_cursor = row_of(state.current_move(), state.len(), self.order);
    }
}
