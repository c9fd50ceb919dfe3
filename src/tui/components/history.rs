//! # History Component
//!
//! Sidebar list of past queries, in the order the backend returned
//! them. No client-side sorting or dedup. Selecting a row emits the
//! query id; the fetch itself happens elsewhere.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `HistoryState` lives in `TuiState`
//! - `History` is created each frame with borrowed state and items

use chrono::{DateTime, Local, Utc};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::api::QuerySummary;
use crate::tui::event::TuiEvent;

/// Leading characters of query_text shown per row.
const ROW_TEXT_CHARS: usize = 60;

/// Persistent state for the history pane.
pub struct HistoryState {
    pub selected: usize,
    pub list_state: ListState,
}

impl HistoryState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default(),
        }
    }

    /// Handle a key event, returning the id to load when a row is picked.
    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        items: &[QuerySummary],
    ) -> Option<HistoryEvent> {
        if items.is_empty() {
            return None;
        }
        self.selected = self.selected.min(items.len() - 1);
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(items.len() - 1);
                None
            }
            TuiEvent::Submit => items
                .get(self.selected)
                .map(|item| HistoryEvent::Select(item.id)),
            _ => None,
        }
    }
}

impl Default for HistoryState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the history pane.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryEvent {
    Select(i64),
}

/// Transient render wrapper for the history pane.
pub struct History<'a> {
    state: &'a mut HistoryState,
    items: &'a [QuerySummary],
    focused: bool,
}

impl<'a> History<'a> {
    pub fn new(state: &'a mut HistoryState, items: &'a [QuerySummary], focused: bool) -> Self {
        Self {
            state,
            items,
            focused,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Recent ");

        if self.items.is_empty() {
            let empty = Paragraph::new("No recent queries")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.state.selected = self.state.selected.min(self.items.len() - 1);
        self.state.list_state.select(Some(self.state.selected));

        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let text_style = if i == self.state.selected && self.focused {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let lines = vec![
                    Line::styled(row_title(&item.query_text), text_style),
                    Line::styled(
                        format_timestamp(&item.created_at),
                        Style::default().fg(Color::DarkGray),
                    ),
                ];
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// First 60 characters of the query text, or a placeholder when blank.
fn row_title(query_text: &str) -> String {
    if query_text.is_empty() {
        return String::from("(empty)");
    }
    query_text.chars().take(ROW_TEXT_CHARS).collect()
}

/// Render a UTC timestamp in the local timezone.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_summaries;

    #[test]
    fn test_select_emits_id_of_highlighted_row() {
        let items = sample_summaries(3);
        let mut state = HistoryState::new();
        state.handle_event(&TuiEvent::CursorDown, &items);
        let event = state.handle_event(&TuiEvent::Submit, &items);
        assert_eq!(event, Some(HistoryEvent::Select(2)));
    }

    #[test]
    fn test_navigation_clamps_at_both_ends() {
        let items = sample_summaries(2);
        let mut state = HistoryState::new();
        state.handle_event(&TuiEvent::CursorUp, &items);
        assert_eq!(state.selected, 0);
        state.handle_event(&TuiEvent::CursorDown, &items);
        state.handle_event(&TuiEvent::CursorDown, &items);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_empty_list_emits_nothing() {
        let mut state = HistoryState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit, &[]), None);
        assert_eq!(state.handle_event(&TuiEvent::CursorDown, &[]), None);
    }

    #[test]
    fn test_selection_clamped_after_list_shrinks() {
        let mut state = HistoryState::new();
        let long = sample_summaries(5);
        state.handle_event(&TuiEvent::CursorDown, &long);
        state.handle_event(&TuiEvent::CursorDown, &long);
        state.handle_event(&TuiEvent::CursorDown, &long);

        let short = sample_summaries(2);
        let event = state.handle_event(&TuiEvent::Submit, &short);
        assert_eq!(event, Some(HistoryEvent::Select(2)));
    }

    #[test]
    fn test_row_title_truncates_to_60_chars() {
        let text = "x".repeat(80);
        assert_eq!(row_title(&text).chars().count(), 60);
        assert_eq!(row_title("short"), "short");
        assert_eq!(row_title(""), "(empty)");
    }
}
