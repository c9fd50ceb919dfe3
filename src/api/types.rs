use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Length category for generated summaries.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SummaryLength {
    #[serde(rename = "short")]
    Short,
    #[serde(rename = "medium")]
    #[default]
    Medium,
    #[serde(rename = "long")]
    Long,
}

impl SummaryLength {
    /// Cycles to the next length option (wraps around).
    pub fn next(self) -> SummaryLength {
        match self {
            SummaryLength::Short => SummaryLength::Medium,
            SummaryLength::Medium => SummaryLength::Long,
            SummaryLength::Long => SummaryLength::Short,
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            SummaryLength::Short => "Short",
            SummaryLength::Medium => "Medium",
            SummaryLength::Long => "Long",
        }
    }

    /// The lowercase wire value, as sent to and received from the backend.
    pub fn wire_name(self) -> &'static str {
        match self {
            SummaryLength::Short => "short",
            SummaryLength::Medium => "medium",
            SummaryLength::Long => "long",
        }
    }
}

/// A source reference retrieved by the backend for a query.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Document {
    pub id: i64,
    pub url: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub content: String,
}

/// A generated text artifact of a given length category.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Summary {
    pub id: i64,
    pub summary_type: SummaryLength,
    #[serde(default)]
    pub summary_text: String,
    pub created_at: DateTime<Utc>,
}

/// A full query record: the submitted text plus everything the backend
/// generated for it. Replaced wholesale on every fetch; never mutated
/// client-side.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Query {
    pub id: i64,
    pub query_text: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub summary_type: Option<SummaryLength>,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub summaries: Vec<Summary>,
}

/// The lightweight record returned by the list endpoint for history rows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuerySummary {
    pub id: i64,
    pub query_text: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for the create endpoint.
#[derive(Serialize, Debug)]
pub struct CreateQueryRequest {
    pub query_text: String,
    pub summary_type: SummaryLength,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Contract test: the create request must serialize to the exact JSON
    /// shape the backend expects.
    #[test]
    fn test_create_request_serialization() {
        let req = CreateQueryRequest {
            query_text: "AI in healthcare".to_string(),
            summary_type: SummaryLength::Medium,
        };
        let serialized = serde_json::to_string(&req).unwrap();
        assert_eq!(
            serialized,
            r#"{"query_text":"AI in healthcare","summary_type":"medium"}"#
        );
    }

    #[test]
    fn test_query_deserializes_without_optional_fields() {
        // Create responses omit summary_type; documents/summaries may be absent.
        let json =
            r#"{"id":1,"query_text":"AI in healthcare","created_at":"2024-01-01T00:00:00Z"}"#;
        let query: Query = serde_json::from_str(json).unwrap();
        assert_eq!(query.id, 1);
        assert_eq!(query.query_text, "AI in healthcare");
        assert!(query.summary_type.is_none());
        assert!(query.documents.is_empty());
        assert!(query.summaries.is_empty());
    }

    #[test]
    fn test_query_deserializes_nested_records() {
        let json = r#"{
            "id": 1,
            "query_text": "AI in healthcare",
            "created_at": "2024-01-01T00:00:00Z",
            "summary_type": "medium",
            "summaries": [
                {"id": 1, "summary_type": "medium", "summary_text": "...", "created_at": "2024-01-01T00:00:01Z"}
            ],
            "documents": []
        }"#;
        let query: Query = serde_json::from_str(json).unwrap();
        assert_eq!(query.summary_type, Some(SummaryLength::Medium));
        assert_eq!(query.summaries.len(), 1);
        assert_eq!(query.summaries[0].summary_type, SummaryLength::Medium);
        assert_eq!(query.summaries[0].summary_text, "...");
        assert!(query.documents.is_empty());
    }

    #[test]
    fn test_summary_length_cycle() {
        assert_eq!(SummaryLength::Short.next(), SummaryLength::Medium);
        assert_eq!(SummaryLength::Medium.next(), SummaryLength::Long);
        assert_eq!(SummaryLength::Long.next(), SummaryLength::Short);
    }

    #[test]
    fn test_summary_length_labels() {
        assert_eq!(SummaryLength::Medium.label(), "Medium");
        assert_eq!(SummaryLength::Medium.wire_name(), "medium");
        assert_eq!(SummaryLength::default(), SummaryLength::Medium);
    }
}
