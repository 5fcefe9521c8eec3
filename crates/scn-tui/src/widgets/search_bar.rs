//! Search bar widget — the incremental query input at the top of the screen.
//!
//! The bar owns the query text and a byte-offset cursor. Every edit reports
//! back to the caller so the App can re-run the overlay search on the catalog.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use scn_core::SearchOutcome;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SearchBarState {
    /// Current query text.
    pub query: String,
    /// Cursor position as a byte offset into `query`. Always on a char
    /// boundary.
    pub cursor: usize,
    /// Result of the most recent search, if one has run.
    pub outcome: Option<SearchOutcome>,
}

impl SearchBarState {
    /// Apply an event to the input buffer. Returns `true` when the query
    /// text changed and the search should be re-run.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                self.query.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                true
            }
            AppEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_boundary(&self.query, self.cursor);
                    self.query.drain(prev..self.cursor);
                    self.cursor = prev;
                    true
                } else {
                    false
                }
            }
            AppEvent::TreeNav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = prev_boundary(&self.query, self.cursor);
                }
                false
            }
            AppEvent::TreeNav(Direction::Right) => {
                if self.cursor < self.query.len() {
                    self.cursor = next_boundary(&self.query, self.cursor);
                }
                false
            }
            _ => false,
        }
    }

    /// Horizontal scroll offset (in columns) keeping the cursor inside a
    /// window of `width` visible columns. Zero until the query outgrows the
    /// window; after that the window follows the cursor.
    pub fn scroll_offset(&self, width: u16) -> u16 {
        let cursor_col = self.query[..self.cursor].chars().count() as u16;
        cursor_col.saturating_sub(width.saturating_sub(1))
    }

    /// Screen position of the text cursor inside `area` (the widget's outer
    /// rect, borders included), accounting for the scroll window.
    pub fn cursor_position(&self, area: Rect) -> Position {
        let width = area.width.saturating_sub(2);
        let cursor_col = self.query[..self.cursor].chars().count() as u16;
        let col = cursor_col - self.scroll_offset(width);
        Position::new(area.x + 1 + col, area.y + 1)
    }
}

fn prev_boundary(s: &str, from: usize) -> usize {
    let mut i = from - 1;
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn next_boundary(s: &str, from: usize) -> usize {
    let mut i = from + 1;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SearchBar<'a> {
    state: &'a SearchBarState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    pub fn new(state: &'a SearchBarState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let line = if self.state.query.is_empty() && !self.focused {
            Line::from(Span::styled(
                "press / to search",
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.state.query.as_str())
        };

        // Scroll the text window so the cursor never runs off the right edge.
        let offset = self.state.scroll_offset(area.width.saturating_sub(2));
        Paragraph::new(line)
            .scroll((0, offset))
            .block(Block::bordered().title("Search").border_style(border_style))
            .render(area, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
