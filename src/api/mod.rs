//! HTTP client for the research assistant backend.

pub mod client;
pub mod types;

pub use client::{ApiClient, ApiError};
pub use types::{CreateQueryRequest, Document, Query, QuerySummary, Summary, SummaryLength};
