//! # TUI Components
//!
//! All UI components for the terminal interface, following two patterns:
//!
//! **Stateless (props-based rendering)**: `TitleBar`, `Loader`, `Alert` —
//! simple display components that receive all data as struct fields and
//! render it.
//!
//! **Stateful (event-driven)**: `QueryForm`, plus the persistent
//! state + transient wrapper pairs `HistoryState`/`History` and
//! `ResultsState`/`Results`. These own local presentation state,
//! translate low-level `TuiEvent`s into high-level component events,
//! and leave the actual I/O to the event loop.
//!
//! Each component file is self-contained: state types, event types,
//! rendering, event handling, and tests live together.

pub mod alert;
pub mod history;
pub mod loader;
pub mod query_form;
pub mod results;
pub mod title_bar;

pub use alert::Alert;
pub use history::{History, HistoryEvent, HistoryState};
pub use loader::Loader;
pub use query_form::{FormEvent, QueryForm};
pub use results::{Results, ResultsEvent, ResultsState};
pub use title_bar::TitleBar;
