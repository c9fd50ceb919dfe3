use std::fmt;

use serde::de::DeserializeOwned;

use super::types::{CreateQueryRequest, Query, QuerySummary, SummaryLength};

/// Errors that can occur when talking to the backend.
/// Variants carry enough info to tell transport failures from API rejections.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The backend answered with a non-2xx status. The body is kept as-is;
    /// it is never parsed as success data.
    Api { status: u16, message: String },
    /// The response claimed success but the body did not decode.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Client for the research assistant REST API.
///
/// Wraps the three endpoints the service exposes: create a query, list
/// past queries, fetch one query by id. No retries, no timeouts beyond
/// reqwest defaults, no schema validation beyond serde decoding.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submits a new research query.
    ///
    /// The text is sent exactly as given; emptiness checks are the
    /// caller's responsibility.
    pub async fn create_query(
        &self,
        query_text: &str,
        summary_type: SummaryLength,
    ) -> Result<Query, ApiError> {
        let body = CreateQueryRequest {
            query_text: query_text.to_string(),
            summary_type,
        };
        let response = self
            .http
            .post(format!("{}/query/", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }

    /// Lists past queries in the order the backend returns them.
    ///
    /// A null or empty response body is treated as an empty list.
    pub async fn list_queries(&self) -> Result<Vec<QuerySummary>, ApiError> {
        let response = self
            .http
            .get(format!("{}/query/list/", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let items: Option<Vec<QuerySummary>> = decode(response).await?;
        Ok(items.unwrap_or_default())
    }

    /// Fetches one full query record by id.
    pub async fn get_query(&self, id: i64) -> Result<Query, ApiError> {
        let response = self
            .http
            .get(format!("{}/query/{id}/", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }
}

/// Reads the body, rejecting non-2xx statuses before any parsing so an
/// error body can never masquerade as data.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(ApiError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    if body.trim().is_empty() {
        // An empty 2xx body decodes like an explicit null.
        return serde_json::from_str("null").map_err(|e| ApiError::Parse(e.to_string()));
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:8000/api/".to_string());
        assert_eq!(client.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Api {
            status: 503,
            message: "backend down".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 503): backend down");
        assert_eq!(
            ApiError::Network("timed out".to_string()).to_string(),
            "network error: timed out"
        );
    }
}
