//! Response DTOs for the user API
//!
//! Defines the structure of outgoing HTTP response bodies. User records and
//! record lists serialize directly from the store types; the DTOs here cover
//! the message, stats, and health payloads.

use serde::Serialize;

use crate::store::User;

/// Generic confirmation payload for the root route and delete operations.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation message
    pub message: String,
}

impl MessageResponse {
    /// Creates a new MessageResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for the count endpoint (GET /stats/count)
#[derive(Debug, Clone, Serialize)]
pub struct CountResponse {
    /// Current number of users
    pub count: usize,
}

impl CountResponse {
    /// Creates a new CountResponse
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

/// Response body for the summary endpoint (GET /stats/summary)
///
/// `firstUser`/`lastUser` are `null` when the collection is empty.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    /// Current number of users
    pub total: usize,
    /// First user in sequence order, if any
    #[serde(rename = "firstUser")]
    pub first_user: Option<User>,
    /// Last user in sequence order, if any
    #[serde(rename = "lastUser")]
    pub last_user: Option<User>,
}

impl SummaryResponse {
    /// Creates a new SummaryResponse
    pub fn new(total: usize, first_user: Option<User>, last_user: Option<User>) -> Self {
        Self {
            total,
            first_user,
            last_user,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
