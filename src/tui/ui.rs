use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{Alert, History, Results, TitleBar};
use crate::tui::{Focus, TuiState};

/// Top-level layout: title bar, sidebar + detail split, form at the
/// bottom (its height follows the buffer), alert overlay on top of
/// everything when set.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, api_base_url: &str) {
    use Constraint::{Length, Min};

    let form_height = tui.query_form.calculate_height(frame.area().width);
    let layout = Layout::vertical([Length(1), Min(0), Length(form_height)]);
    let [title_area, body_area, form_area] = layout.areas(frame.area());

    TitleBar::new(api_base_url, &app.status_message).render(frame, title_area);

    let [side_area, main_area] = Layout::horizontal([Length(34), Min(0)]).areas(body_area);
    History::new(
        &mut tui.history,
        &app.history,
        tui.focus == Focus::History && app.alert.is_none(),
    )
    .render(frame, side_area);
    Results::new(
        &mut tui.results,
        app.result.as_ref(),
        tui.focus == Focus::Results && app.alert.is_none(),
    )
    .render(frame, main_area);

    tui.query_form.focused = tui.focus == Focus::Form && app.alert.is_none();
    tui.query_form.render(frame, form_area);

    if let Some(message) = &app.alert {
        Alert::new(message).render(frame, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_query_with_summary, sample_summaries};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App) -> Terminal<TestBackend> {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        terminal
            .draw(|f| draw_ui(f, app, &mut tui, "http://localhost:8000/api"))
            .unwrap();
        terminal
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_empty_state_shows_placeholders() {
        let app = App::new();
        let terminal = draw(&app);
        let text = buffer_text(&terminal);
        assert!(text.contains("No recent queries"));
        assert!(text.contains("No results yet"));
        assert!(text.contains("Research query"));
    }

    #[test]
    fn test_draw_ui_with_result_and_history() {
        let mut app = App::new();
        app.result = Some(sample_query_with_summary(1, "AI in healthcare"));
        app.history = sample_summaries(2);
        let terminal = draw(&app);
        let text = buffer_text(&terminal);
        assert!(text.contains("Result for: AI in healthcare"));
        assert!(text.contains("No documents found."));
        assert!(text.contains("query 1"));
    }

    #[test]
    fn test_draw_ui_alert_overlay() {
        let mut app = App::new();
        app.alert = Some("API error (HTTP 500): boom".to_string());
        let terminal = draw(&app);
        let text = buffer_text(&terminal);
        assert!(text.contains("Error"));
        assert!(text.contains("Dismiss"));
    }
}
