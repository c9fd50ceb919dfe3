//! # Actions
//!
//! Everything that can happen in Lookout becomes an `Action`.
//! User presses Enter in the form? That's `Action::SubmitQuery`.
//! The backend responds? That's `Action::QueryCreated`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state. No side effects here. I/O happens elsewhere: when
//! an action requires a network call, `update()` returns an `Effect`
//! and the event loop spawns the task.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply actions, assert on state.

use log::{info, warn};

use crate::api::{Query, QuerySummary, SummaryLength};
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    /// User submitted the form with the given raw text and length choice.
    SubmitQuery { text: String, length: SummaryLength },
    /// The create call finished. `seq` is the tag it was issued with.
    QueryCreated { seq: u64, query: Query },
    /// The create call failed. Surfaced as a blocking alert.
    SubmitFailed { message: String },
    /// The list call finished.
    HistoryLoaded(Vec<QuerySummary>),
    /// The list call failed. Surfaced on the status line only.
    HistoryFailed(String),
    /// User picked a history row.
    SelectQuery(i64),
    /// The get-by-id call finished. `seq` is the tag it was issued with.
    QueryFetched { seq: u64, query: Query },
    /// The get-by-id call failed. Surfaced on the status line only.
    FetchFailed(String),
    /// Non-blocking status line text (clipboard feedback and the like).
    SetStatus(String),
    /// Dismiss the blocking alert.
    DismissAlert,
    Quit,
}

/// Side effects the event loop must carry out after an `update()`.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn the create call for an accepted submission.
    SpawnCreate {
        seq: u64,
        text: String,
        length: SummaryLength,
    },
    /// Spawn the get-by-id call for a history selection.
    SpawnGet { seq: u64, id: i64 },
    /// A submission was accepted by the backend: clear the form text and
    /// re-fetch the history list.
    RefreshHistory,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SubmitQuery { text, length } => {
            // Whitespace-only input never reaches the network.
            if app.is_loading || text.trim().is_empty() {
                return Effect::None;
            }
            app.is_loading = true;
            app.status_message = String::from("Researching...");
            let seq = app.next_seq();
            Effect::SpawnCreate { seq, text, length }
        }
        Action::QueryCreated { seq, query } => {
            app.is_loading = false;
            if seq != app.latest_seq {
                info!("Discarding stale create response (seq {seq})");
                return Effect::None;
            }
            info!("Query {} created", query.id);
            app.status_message = format!("Query #{} created", query.id);
            app.result = Some(query);
            Effect::RefreshHistory
        }
        Action::SubmitFailed { message } => {
            app.is_loading = false;
            app.status_message.clear();
            app.alert = Some(message);
            Effect::None
        }
        Action::HistoryLoaded(items) => {
            app.history = items;
            Effect::None
        }
        Action::HistoryFailed(message) => {
            warn!("History refresh failed: {message}");
            app.status_message = format!("History refresh failed: {message}");
            Effect::None
        }
        Action::SelectQuery(id) => {
            app.status_message = format!("Loading query #{id}...");
            let seq = app.next_seq();
            Effect::SpawnGet { seq, id }
        }
        Action::QueryFetched { seq, query } => {
            if seq != app.latest_seq {
                info!("Discarding stale fetch response (seq {seq})");
                return Effect::None;
            }
            app.status_message = format!("Showing query #{}", query.id);
            app.result = Some(query);
            Effect::None
        }
        Action::FetchFailed(message) => {
            warn!("Selection fetch failed: {message}");
            app.status_message = format!("Fetch failed: {message}");
            Effect::None
        }
        Action::SetStatus(message) => {
            app.status_message = message;
            Effect::None
        }
        Action::DismissAlert => {
            app.alert = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_query, sample_summaries};

    fn submit(app: &mut App, text: &str) -> Effect {
        update(
            app,
            Action::SubmitQuery {
                text: text.to_string(),
                length: SummaryLength::Medium,
            },
        )
    }

    #[test]
    fn test_whitespace_only_submission_never_spawns() {
        let mut app = App::new();
        assert_eq!(submit(&mut app, "   "), Effect::None);
        assert_eq!(submit(&mut app, ""), Effect::None);
        assert!(!app.is_loading);
        assert_eq!(app.latest_seq, 0);
    }

    #[test]
    fn test_submission_spawns_create_with_raw_text() {
        let mut app = App::new();
        let effect = submit(&mut app, "  AI in healthcare ");
        // The text goes out exactly as typed; only the emptiness check trims.
        assert_eq!(
            effect,
            Effect::SpawnCreate {
                seq: 1,
                text: "  AI in healthcare ".to_string(),
                length: SummaryLength::Medium,
            }
        );
        assert!(app.is_loading);
    }

    #[test]
    fn test_submission_blocked_while_loading() {
        let mut app = App::new();
        submit(&mut app, "first");
        assert_eq!(submit(&mut app, "second"), Effect::None);
        assert_eq!(app.latest_seq, 1);
    }

    #[test]
    fn test_successful_create_replaces_result_and_refreshes_history() {
        let mut app = App::new();
        submit(&mut app, "AI in healthcare");
        let effect = update(
            &mut app,
            Action::QueryCreated {
                seq: 1,
                query: sample_query(1, "AI in healthcare"),
            },
        );
        assert_eq!(effect, Effect::RefreshHistory);
        assert!(!app.is_loading);
        assert_eq!(app.result.as_ref().unwrap().query_text, "AI in healthcare");
    }

    #[test]
    fn test_submit_failure_sets_blocking_alert_and_clears_loading() {
        let mut app = App::new();
        submit(&mut app, "AI in healthcare");
        let effect = update(
            &mut app,
            Action::SubmitFailed {
                message: "API error (HTTP 500): boom".to_string(),
            },
        );
        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
        assert_eq!(app.alert.as_deref(), Some("API error (HTTP 500): boom"));

        update(&mut app, Action::DismissAlert);
        assert!(app.alert.is_none());
    }

    #[test]
    fn test_selection_replaces_previous_result() {
        let mut app = App::new();
        app.result = Some(sample_query(1, "old"));

        let effect = update(&mut app, Action::SelectQuery(42));
        let Effect::SpawnGet { seq, id } = effect else {
            panic!("expected SpawnGet, got {effect:?}");
        };
        assert_eq!(id, 42);

        update(
            &mut app,
            Action::QueryFetched {
                seq,
                query: sample_query(42, "new"),
            },
        );
        assert_eq!(app.result.as_ref().unwrap().id, 42);
        assert_eq!(app.result.as_ref().unwrap().query_text, "new");
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        // Two quick selections: the first response lands last but must lose.
        let mut app = App::new();
        let Effect::SpawnGet { seq: seq_a, .. } = update(&mut app, Action::SelectQuery(1)) else {
            panic!("expected SpawnGet");
        };
        let Effect::SpawnGet { seq: seq_b, .. } = update(&mut app, Action::SelectQuery(2)) else {
            panic!("expected SpawnGet");
        };

        update(
            &mut app,
            Action::QueryFetched {
                seq: seq_b,
                query: sample_query(2, "wanted"),
            },
        );
        update(
            &mut app,
            Action::QueryFetched {
                seq: seq_a,
                query: sample_query(1, "stale"),
            },
        );
        assert_eq!(app.result.as_ref().unwrap().id, 2);
    }

    #[test]
    fn test_stale_create_is_discarded_after_selection() {
        let mut app = App::new();
        submit(&mut app, "slow create");
        update(&mut app, Action::SelectQuery(7));

        // The create resolves after the selection superseded it.
        update(
            &mut app,
            Action::QueryCreated {
                seq: 1,
                query: sample_query(99, "slow create"),
            },
        );
        assert!(!app.is_loading);
        assert!(app.result.is_none());
    }

    #[test]
    fn test_history_failures_stay_on_status_line() {
        let mut app = App::new();
        update(
            &mut app,
            Action::HistoryFailed("network error: refused".to_string()),
        );
        assert!(app.alert.is_none());
        assert!(app.status_message.contains("History refresh failed"));

        update(&mut app, Action::FetchFailed("timed out".to_string()));
        assert!(app.alert.is_none());
        assert!(app.status_message.contains("Fetch failed"));
    }

    #[test]
    fn test_history_loaded_replaces_list_in_backend_order() {
        let mut app = App::new();
        update(&mut app, Action::HistoryLoaded(sample_summaries(3)));
        assert_eq!(app.history.len(), 3);
        assert_eq!(app.history[0].id, 1);

        update(&mut app, Action::HistoryLoaded(Vec::new()));
        assert!(app.history.is_empty());
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
