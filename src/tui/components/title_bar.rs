//! # TitleBar Component
//!
//! Top status bar showing the application name, the backend in use, and
//! the current status line. Purely presentational: all three values are
//! props, there is no internal state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct TitleBar<'a> {
    pub api_base_url: &'a str,
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(api_base_url: &'a str, status_message: &'a str) -> Self {
        Self {
            api_base_url,
            status_message,
        }
    }

    fn title_text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Lookout — research assistant ({})", self.api_base_url)
        } else {
            format!(
                "Lookout — research assistant ({}) | {}",
                self.api_base_url, self.status_message
            )
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.title_text(), Style::default().fg(Color::Gray));
        frame.render_widget(span, area);
    }
}
