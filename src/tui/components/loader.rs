//! # Loader Component
//!
//! Stateless spinner shown while a submission is in flight. The frame
//! index is a prop driven by the event loop's animation timer.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Loader<'a> {
    pub frame_index: usize,
    pub label: &'a str,
}

impl<'a> Loader<'a> {
    pub fn new(frame_index: usize, label: &'a str) -> Self {
        Self { frame_index, label }
    }

    /// The spinner glyph for the current animation frame.
    pub fn glyph(&self) -> &'static str {
        SPINNER_FRAMES[self.frame_index % SPINNER_FRAMES.len()]
    }
}

impl Component for Loader<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = format!("{} {}", self.glyph(), self.label);
        let paragraph = Paragraph::new(text).style(Style::default().fg(Color::Yellow));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_wraps_around() {
        let first = Loader::new(0, "Researching").glyph();
        let wrapped = Loader::new(SPINNER_FRAMES.len(), "Researching").glyph();
        assert_eq!(first, wrapped);
    }
}
