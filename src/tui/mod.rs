//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (a submission in flight): draws every ~80ms for a
//!   smooth spinner.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Concurrency
//!
//! Network calls run on spawned tokio tasks that report back through a
//! std mpsc channel of `Action`s; the loop drains that channel after
//! handling input. At most one create request is in flight (the form is
//! blocked while loading), but overlapping selection fetches are
//! possible — the sequence tags in `core::action` make the most
//! recently requested one win.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::api::{ApiClient, SummaryLength};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{FormEvent, HistoryEvent, HistoryState, QueryForm, ResultsEvent, ResultsState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    History,
    Results,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Form => Focus::History,
            Focus::History => Focus::Results,
            Focus::Results => Focus::Form,
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::Form => Focus::Results,
            Focus::History => Focus::Form,
            Focus::Results => Focus::History,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub query_form: QueryForm,
    pub history: HistoryState,
    pub results: ResultsState,
    // Which pane has focus
    pub focus: Focus,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            query_form: QueryForm::new(),
            history: HistoryState::new(),
            results: ResultsState::new(),
            focus: Focus::Form, // User expects to type immediately
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client = Arc::new(ApiClient::new(config.api_base_url.clone()));
    let mut app = App::new();
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Initial history load. Failures surface on the status line only.
    spawn_list(client.clone(), tx.clone());

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync component props with App state
        tui.query_form.loading = app.is_loading;
        tui.query_form.spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;

        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, client.base_url()))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of focus
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // The alert is modal: it swallows everything except dismissal
            if app.alert.is_some() {
                if matches!(event, TuiEvent::Escape | TuiEvent::Submit) {
                    update(&mut app, Action::DismissAlert);
                }
                continue;
            }

            // Focus cycling
            if matches!(event, TuiEvent::FocusNext) {
                tui.focus = tui.focus.next();
                continue;
            }
            if matches!(event, TuiEvent::FocusPrev) {
                tui.focus = tui.focus.prev();
                continue;
            }

            // Route everything else to the focused pane
            match tui.focus {
                Focus::Form => {
                    if let Some(FormEvent::Submit { text, length }) =
                        tui.query_form.handle_event(&event)
                    {
                        submit_query(&mut app, &client, &tx, text, length);
                    }
                }
                Focus::History => {
                    if let Some(HistoryEvent::Select(id)) =
                        tui.history.handle_event(&event, &app.history)
                    {
                        if let Effect::SpawnGet { seq, id } = update(&mut app, Action::SelectQuery(id))
                        {
                            spawn_get(client.clone(), seq, id, tx.clone());
                        }
                    }
                }
                Focus::Results => {
                    if let Some(ResultsEvent::Copy(text)) =
                        tui.results.handle_event(&event, app.result.as_ref())
                    {
                        copy_to_clipboard(&mut app, &text);
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle completions from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);

            // A result-replacing completion that still carries the latest
            // tag will reset the detail pane's presentation state.
            let replaces_result = match &action {
                Action::QueryCreated { seq, .. } | Action::QueryFetched { seq, .. } => {
                    *seq == app.latest_seq
                }
                _ => false,
            };

            match update(&mut app, action) {
                Effect::Quit => {
                    should_quit = true;
                }
                Effect::RefreshHistory => {
                    tui.query_form.reset_text();
                    spawn_list(client.clone(), tx.clone());
                }
                _ => {}
            }

            if replaces_result {
                tui.results.reset();
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Runs a submission through the reducer and spawns the create call if
/// it was accepted.
fn submit_query(
    app: &mut App,
    client: &Arc<ApiClient>,
    tx: &mpsc::Sender<Action>,
    text: String,
    length: SummaryLength,
) {
    let effect = update(app, Action::SubmitQuery { text, length });
    if let Effect::SpawnCreate { seq, text, length } = effect {
        spawn_create(client.clone(), seq, text, length, tx.clone());
    }
}

fn spawn_create(
    client: Arc<ApiClient>,
    seq: u64,
    text: String,
    length: SummaryLength,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning create request (seq {seq})");
    tokio::spawn(async move {
        let action = match client.create_query(&text, length).await {
            Ok(query) => Action::QueryCreated { seq, query },
            Err(e) => {
                log::error!("create_query failed: {e}");
                Action::SubmitFailed {
                    message: e.to_string(),
                }
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send create result: receiver dropped");
        }
    });
}

fn spawn_list(client: Arc<ApiClient>, tx: mpsc::Sender<Action>) {
    debug!("Spawning history refresh");
    tokio::spawn(async move {
        let action = match client.list_queries().await {
            Ok(items) => Action::HistoryLoaded(items),
            Err(e) => Action::HistoryFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send history result: receiver dropped");
        }
    });
}

fn spawn_get(client: Arc<ApiClient>, seq: u64, id: i64, tx: mpsc::Sender<Action>) {
    info!("Spawning fetch for query {id} (seq {seq})");
    tokio::spawn(async move {
        let action = match client.get_query(id).await {
            Ok(query) => Action::QueryFetched { seq, query },
            Err(e) => Action::FetchFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send fetch result: receiver dropped");
        }
    });
}

/// Puts the text on the OS clipboard, reporting the outcome on the
/// status line.
fn copy_to_clipboard(app: &mut App, text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(()) => {
                update(app, Action::SetStatus("Copied summary to clipboard".to_string()));
            }
            Err(e) => {
                warn!("Clipboard write failed: {e}");
                update(app, Action::SetStatus("Clipboard unavailable".to_string()));
            }
        },
        Err(e) => {
            warn!("Clipboard unavailable: {e}");
            update(app, Action::SetStatus("Clipboard unavailable".to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_covers_all_panes() {
        let mut focus = Focus::Form;
        focus = focus.next();
        assert_eq!(focus, Focus::History);
        focus = focus.next();
        assert_eq!(focus, Focus::Results);
        focus = focus.next();
        assert_eq!(focus, Focus::Form);
        assert_eq!(Focus::Form.prev(), Focus::Results);
    }

    #[test]
    fn test_tui_state_starts_on_form() {
        let tui = TuiState::new();
        assert_eq!(tui.focus, Focus::Form);
        assert!(tui.query_form.buffer.is_empty());
    }
}
