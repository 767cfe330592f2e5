use serde::{Deserialize, Serialize};

use crate::models::domain::MatchResult;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Response for the move-member endpoint
///
/// `moved` is false when the editor rejected the gesture; the result is then
/// returned unchanged so the client can snap the drag back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveMemberResponse {
    pub moved: bool,
    pub outcome: String,
    pub result: MatchResult,
}

/// Response for deleting a stored match result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResultResponse {
    #[serde(rename = "formId")]
    pub form_id: String,
    pub deleted: bool,
}
