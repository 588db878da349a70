use serde::{Deserialize, Serialize};

/// Body of every non-2xx JSON response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateToolStatusRequest {
    pub status: Option<String>,
}

/// Optional narrowing for tool listings.
#[derive(Debug, Default, Deserialize)]
pub struct ToolFilterQuery {
    /// Case-insensitive substring of name or description.
    pub search: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: String,
    pub total: usize,
    pub active: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
}
