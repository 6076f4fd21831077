use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

use crate::types::dto::common::ErrorBody;

/// Error responses for the trust score endpoint
#[derive(ApiResponse, Debug)]
pub enum TrustError {
    /// No trust score recorded for the requested user id
    #[oai(status = 404)]
    NotFound(Json<ErrorBody>),
}

impl TrustError {
    /// Create a NotFound error for the given user id
    pub fn not_found(user_id: &str) -> Self {
        TrustError::NotFound(Json(ErrorBody {
            error: format!("No trust score found for user {}", user_id),
        }))
    }
}

impl fmt::Display for TrustError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrustError::NotFound(json) => write!(f, "{}", json.0.error),
        }
    }
}
