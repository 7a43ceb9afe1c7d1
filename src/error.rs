//! Error types for the user API
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
/// Unified error type for the user API.
///
/// Every handler failure is one of these two kinds; nothing else escapes
/// a handler.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No user matches the supplied id, or the collection is empty
    #[error("{0}")]
    NotFound(String),

    /// Missing required field or uniqueness conflict
    #[error("{0}")]
    Validation(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the user API.
pub type Result<T> = std::result::Result<T, ApiError>;
