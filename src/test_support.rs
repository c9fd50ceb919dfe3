//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::{TimeZone, Utc};

use crate::api::{Document, Query, QuerySummary, Summary, SummaryLength};

/// A full query record with no documents or summaries.
pub fn sample_query(id: i64, text: &str) -> Query {
    Query {
        id,
        query_text: text.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        summary_type: Some(SummaryLength::Medium),
        documents: Vec::new(),
        summaries: Vec::new(),
    }
}

/// The concrete scenario record: one medium summary, zero documents.
pub fn sample_query_with_summary(id: i64, text: &str) -> Query {
    let mut query = sample_query(id, text);
    query.summaries.push(Summary {
        id: 1,
        summary_type: SummaryLength::Medium,
        summary_text: "...".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 1).unwrap(),
    });
    query
}

pub fn sample_document(id: i64, url: &str, content: &str) -> Document {
    Document {
        id,
        url: url.to_string(),
        source: "example.org".to_string(),
        content: content.to_string(),
    }
}

/// `n` history rows with ids 1..=n, in backend order.
pub fn sample_summaries(n: i64) -> Vec<QuerySummary> {
    (1..=n)
        .map(|id| QuerySummary {
            id,
            query_text: format!("query {id}"),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        })
        .collect()
}
