//! # Application State
//!
//! Core business state for Lookout. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── result: Option<Query>          // currently displayed query, if any
//! ├── history: Vec<QuerySummary>     // past queries, backend order
//! ├── is_loading: bool               // a submission is in flight
//! ├── status_message: String         // non-blocking status line text
//! ├── alert: Option<String>          // blocking modal message (submission failures)
//! └── latest_seq: u64                // tag of the most recently issued fetch
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.
//!
//! The `result` cell is either absent or a complete record last returned by
//! the backend; it is replaced wholesale, never merged. `latest_seq` tags
//! every fetch that would replace it, so a response that arrives after a
//! newer request was issued is discarded instead of overwriting it.

use crate::api::{Query, QuerySummary};

pub struct App {
    pub result: Option<Query>,
    pub history: Vec<QuerySummary>,
    pub is_loading: bool,
    pub status_message: String,
    pub alert: Option<String>,
    /// Sequence tag of the most recently issued result-replacing fetch.
    /// Only a completion carrying this tag may set `result`.
    pub latest_seq: u64,
}

impl App {
    pub fn new() -> Self {
        Self {
            result: None,
            history: Vec::new(),
            is_loading: false,
            status_message: String::new(),
            alert: None,
            latest_seq: 0,
        }
    }

    /// Issues the next fetch sequence tag, superseding all outstanding fetches.
    pub fn next_seq(&mut self) -> u64 {
        self.latest_seq += 1;
        self.latest_seq
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
