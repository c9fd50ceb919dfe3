//! # Results Component
//!
//! Detail view of the current query: header, generated summaries, and
//! retrieved documents. Polymorphic on presence of data: renders a
//! placeholder until a query has been submitted or selected.
//!
//! The whole pane scrolls (PageUp/PageDown); long document content is
//! additionally clipped to a fixed number of lines per document so one
//! huge page doesn't bury the rest. Up/Down moves the summary
//! highlight and `c` copies the highlighted summary to the clipboard.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::api::Query;
use crate::tui::components::history::format_timestamp;
use crate::tui::event::TuiEvent;

/// Lines of raw content shown per document before clipping.
const DOC_CONTENT_LINES: usize = 8;
/// Rows jumped by PageUp/PageDown.
const PAGE_SCROLL: u16 = 10;

/// Persistent state for the results pane.
pub struct ResultsState {
    pub scroll: u16,
    pub selected_summary: usize,
}

impl ResultsState {
    pub fn new() -> Self {
        Self {
            scroll: 0,
            selected_summary: 0,
        }
    }

    /// Reset presentation state when a new query replaces the result.
    pub fn reset(&mut self) {
        self.scroll = 0;
        self.selected_summary = 0;
    }

    /// Handle a key event. Returns the summary text to copy when the
    /// user asks for it and the highlighted summary has text.
    pub fn handle_event(&mut self, event: &TuiEvent, query: Option<&Query>) -> Option<ResultsEvent> {
        let query = query?;
        match event {
            TuiEvent::CursorUp => {
                self.selected_summary = self.selected_summary.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if !query.summaries.is_empty() {
                    self.selected_summary =
                        (self.selected_summary + 1).min(query.summaries.len() - 1);
                }
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll = self.scroll.saturating_sub(PAGE_SCROLL);
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll = self.scroll.saturating_add(PAGE_SCROLL);
                None
            }
            TuiEvent::InputChar('c') => {
                // Copy is a no-op when there is nothing to copy.
                let summary = query.summaries.get(self.selected_summary)?;
                if summary.summary_text.is_empty() {
                    return None;
                }
                Some(ResultsEvent::Copy(summary.summary_text.clone()))
            }
            _ => None,
        }
    }
}

impl Default for ResultsState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the results pane.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsEvent {
    Copy(String),
}

/// Transient render wrapper for the results pane.
pub struct Results<'a> {
    state: &'a mut ResultsState,
    query: Option<&'a Query>,
    focused: bool,
}

impl<'a> Results<'a> {
    pub fn new(state: &'a mut ResultsState, query: Option<&'a Query>, focused: bool) -> Self {
        Self {
            state,
            query,
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
            .title(" Results ");

        let Some(query) = self.query else {
            let placeholder = Paragraph::new("No results yet. Submit a query to see results.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(placeholder, area);
            return;
        };

        let lines = build_lines(query, self.state.selected_summary, self.focused);
        let max_scroll = (lines.len() as u16).saturating_sub(1);
        self.state.scroll = self.state.scroll.min(max_scroll);

        let body = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll, 0));
        frame.render_widget(body, area);
    }
}

/// Assembles the full detail view as styled lines. Pure, so tests can
/// assert on content without a terminal.
fn build_lines(query: &Query, selected_summary: usize, focused: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(Line::styled(
        format!("Result for: {}", query.query_text),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::styled(
        format!(
            "Query ID: {} • {}",
            query.id,
            format_timestamp(&query.created_at)
        ),
        Style::default().fg(Color::DarkGray),
    ));
    lines.push(Line::default());

    lines.push(Line::styled(
        "Summary",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ));
    if query.summaries.is_empty() {
        lines.push(Line::styled(
            "No summary available.",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        for (i, summary) in query.summaries.iter().enumerate() {
            let header_style = if i == selected_summary && focused {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Green)
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} • {}", summary.summary_type.wire_name(), format_timestamp(&summary.created_at)),
                    header_style,
                ),
                Span::styled("  [c: copy]", Style::default().fg(Color::DarkGray)),
            ]));
            for text_line in summary.summary_text.lines() {
                lines.push(Line::from(text_line.to_string()));
            }
            lines.push(Line::default());
        }
    }
    lines.push(Line::default());

    lines.push(Line::styled(
        format!("Documents ({})", query.documents.len()),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ));
    if query.documents.is_empty() {
        lines.push(Line::styled(
            "No documents found.",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        for doc in &query.documents {
            let label = if doc.source.is_empty() {
                doc.url.clone()
            } else {
                doc.source.clone()
            };
            lines.push(Line::from(vec![
                Span::styled(
                    label,
                    Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
                ),
                Span::styled(format!("  {}", doc.url), Style::default().fg(Color::DarkGray)),
            ]));
            let mut content_lines = doc.content.lines();
            for text_line in content_lines.by_ref().take(DOC_CONTENT_LINES) {
                lines.push(Line::from(text_line.to_string()));
            }
            if content_lines.next().is_some() {
                lines.push(Line::styled("…", Style::default().fg(Color::DarkGray)));
            }
            lines.push(Line::default());
        }
    }

    lines
}
