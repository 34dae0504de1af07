//! Stateless UI rendering for the game and its history.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{GameView, Player, Position, Square};

use super::app::{App, Focus};
use crate::history_list::{display_order, entry_text};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_PANE_WIDTH: u16 = CELL_WIDTH * 3 + 4;

/// Screen regions, shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Bordered pane holding the board.
    pub board_pane: Rect,
    /// One rectangle per square, row-major.
    pub cells: [Rect; 9],
    /// Bordered pane holding the history list.
    pub history_pane: Rect,
    /// Rows of the history list inside its border.
    pub history_rows: Rect,
    /// Status line.
    pub status: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Computes the layout for a terminal of the given area.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(CELL_HEIGHT * 3 + 2),
                Constraint::Length(3), // Status
                Constraint::Length(3), // Help
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_PANE_WIDTH), Constraint::Min(0)])
            .split(chunks[1]);

        let board_area = center_rect(inner(main[0]), CELL_WIDTH * 3, CELL_HEIGHT * 3);
        let cells = Position::ALL.map(|pos| {
            let cell = Rect::new(
                board_area.x + pos.col() as u16 * CELL_WIDTH,
                board_area.y + pos.row() as u16 * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            );
            cell.intersection(board_area)
        });

        Self {
            title: chunks[0],
            board_pane: main[0],
            cells,
            history_pane: main[1],
            history_rows: inner(main[1]),
            status: chunks[2],
            help: chunks[3],
        }
    }

    /// The square under a terminal coordinate.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| contains(self.cells[pos.to_index()], column, row))
    }

    /// The history list row (relative to the list top) under a coordinate.
    pub fn history_row_at(&self, column: u16, row: u16) -> Option<usize> {
        contains(self.history_rows, column, row).then(|| (row - self.history_rows.y) as usize)
    }
}

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());
    let view = app.session().view();

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    draw_board(frame, &layout, &view, app);
    draw_history(frame, &layout, &view, app);

    let status = Paragraph::new(view.status().as_str())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, layout.status);

    let help = Paragraph::new("Click/Enter: play or jump | 1-9 | Tab: focus | S: order | Q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout.help);
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, view: &GameView, app: &App) {
    let focused = app.focus() == Focus::Board;
    frame.render_widget(pane_block("Board".to_string(), focused), layout.board_pane);

    let highlight = if *app.settings().highlight_winner() {
        *view.winning_line()
    } else {
        None
    };

    for pos in Position::ALL {
        let square = view.squares()[pos.to_index()];
        let mut style = match square {
            Square::Empty => Style::default().fg(Color::DarkGray),
            Square::Occupied(Player::X) => {
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
            }
            Square::Occupied(Player::O) => {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            }
        };
        if highlight.is_some_and(|line| line.contains(pos)) {
            style = style.bg(Color::Green).fg(Color::Black);
        }
        if focused && pos == app.cursor() {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let cell = Paragraph::new(Line::from(Span::styled(square.symbol(), style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(cell, layout.cells[pos.to_index()]);
    }
}

fn draw_history(frame: &mut Frame, layout: &ScreenLayout, view: &GameView, app: &App) {
    let focused = app.focus() == Focus::History;
    let title = format!("History ({})", app.order().label());
    frame.render_widget(pane_block(title, focused), layout.history_pane);

    let order = display_order(view.moves().len(), app.order());
    let window = app.history_window(layout.history_rows.height as usize);

    let lines: Vec<Line> = window
        .map(|row| {
            let entry = &view.moves()[order[row]];
            let current = *entry.is_current();
            let marker = if current { "> " } else { "  " };
            let text = format!(
                "{}{}",
                marker,
                entry_text(entry, *app.settings().show_locations())
            );

            let mut style = if current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if focused && row == app.history_cursor() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(Span::styled(text, style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), layout.history_rows);
}

fn inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
