//! Request and Response models for the user API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{
    CreateUserRequest, DomainQuery, PatchEmailRequest, PatchNameRequest, SearchQuery,
    UpdateUserRequest,
};
pub use responses::{
    CountResponse, ErrorResponse, HealthResponse, MessageResponse, SummaryResponse,
};
