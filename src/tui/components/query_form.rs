//! # QueryForm Component
//!
//! The submission form: a text buffer, the summary length selector, and
//! a live character counter.
//!
//! ## State Management
//!
//! The buffer, cursor, and selected length are internal state. The
//! loading flag and spinner frame are props synced from the application
//! state each frame. While loading, editing stays enabled but Submit
//! and Clear are blocked, matching the disabled buttons of a form whose
//! request is in flight.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::api::SummaryLength;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::loader::Loader;
use crate::tui::event::TuiEvent;

/// Tallest the text area gets before content is clipped.
const MAX_VISIBLE_LINES: u16 = 6;
/// Borders plus the hint line below the text area.
const VERTICAL_OVERHEAD: u16 = 3;

/// High-level events emitted by the QueryForm
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// User submitted the form (Enter pressed with non-blank text, not loading)
    Submit { text: String, length: SummaryLength },
}

pub struct QueryForm {
    /// Text buffer (internal state)
    pub buffer: String,
    /// Byte offset of the cursor within `buffer`
    cursor: usize,
    /// Selected summary length (internal state, survives submissions)
    pub length: SummaryLength,
    /// True while the create request is in flight (prop)
    pub loading: bool,
    /// True when this pane has keyboard focus (prop)
    pub focused: bool,
    /// Animation frame for the in-flight spinner (prop)
    pub spinner_frame: usize,
}

impl QueryForm {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            length: SummaryLength::default(),
            loading: false,
            focused: false,
            spinner_frame: 0,
        }
    }

    /// Clears the text after an accepted submission. Length choice is kept.
    pub fn reset_text(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    fn can_submit(&self) -> bool {
        !self.loading && !self.buffer.trim().is_empty()
    }

    fn can_clear(&self) -> bool {
        !self.loading && !self.buffer.is_empty()
    }

    /// Required height for the current buffer, clamped to viewport limits.
    pub fn calculate_height(&self, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        let lines = wrap_line_count(&self.buffer, width).min(MAX_VISIBLE_LINES);
        lines + VERTICAL_OVERHEAD
    }

    /// Cursor position within the text area, in (column, row) cells.
    fn cursor_cell(&self, content_width: u16) -> (u16, u16) {
        let width = inner_width(content_width);
        if width == 0 || self.cursor == 0 {
            return (0, 0);
        }
        let prefix = &self.buffer[..self.cursor];
        let lines = textwrap::wrap(prefix, width as usize);
        match lines.last() {
            Some(last) => {
                let row = (lines.len() as u16 - 1).min(MAX_VISIBLE_LINES - 1);
                let col = (UnicodeWidthStr::width(last.as_ref()) as u16).min(width - 1);
                (col, row)
            }
            None => (0, 0),
        }
    }

    fn counter_text(&self) -> String {
        format!("{} chars • Length: {}", self.buffer.chars().count(), self.length.label())
    }
}

impl Default for QueryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for QueryForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Research query ")
            .title_bottom(Line::from(" Enter Research  ^L Length  ^U Clear  Tab Pane ").centered());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [text_area, hint_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let text = Paragraph::new(self.buffer.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });
        frame.render_widget(text, text_area);

        // Hint line: guidance or spinner on the left, live counter on the right
        if self.loading {
            Loader::new(self.spinner_frame, "Researching").render(frame, hint_area);
        } else {
            let hint = Paragraph::new("Describe what you want to research.")
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM));
            frame.render_widget(hint, hint_area);
        }
        let counter = Paragraph::new(self.counter_text())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Right);
        frame.render_widget(counter, hint_area);

        if self.focused {
            let (col, row) = self.cursor_cell(area.width);
            frame.set_cursor_position((text_area.x + col, text_area.y + row));
        }
    }
}

impl EventHandler for QueryForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                None
            }
            TuiEvent::Paste(text) => {
                // The form is a single logical paragraph; fold pasted newlines
                let flat = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &flat);
                self.cursor += flat.len();
                None
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                }
                None
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                }
                None
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CycleLength => {
                self.length = self.length.next();
                None
            }
            TuiEvent::ClearInput => {
                if self.can_clear() {
                    self.reset_text();
                }
                None
            }
            TuiEvent::Submit => {
                if self.can_submit() {
                    Some(FormEvent::Submit {
                        text: self.buffer.clone(),
                        length: self.length,
                    })
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(2)
}

fn wrap_line_count(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    textwrap::wrap(text, width as usize).len().max(1) as u16
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos - 1;
    while p > 0 && !s.is_char_boundary(p) {
        p -= 1;
    }
    p
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos + 1;
    while p < s.len() && !s.is_char_boundary(p) {
        p += 1;
    }
    p
}
