use crate::models::domain::StudentSummary;
use serde::{Deserialize, Serialize};

/// Response for the above-threshold query
///
/// `count` always equals `students.len()`; an empty match list is a
/// success, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdMatches {
    pub count: usize,
    pub students: Vec<StudentSummary>,
}

/// Error body for validation failures (HTTP 400)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error body for unexpected failures (HTTP 500)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternalErrorResponse {
    pub error: String,
    pub details: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
