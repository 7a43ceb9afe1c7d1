//! Request DTOs for the user API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.
//!
//! Validation policy is presence-only: a field is "provided" when it is
//! present and non-empty. An empty string counts as not provided, so an
//! update carrying `"name": ""` leaves the name unchanged.

use serde::Deserialize;

use crate::store::User;

/// Returns the field value when it is present and non-empty.
fn provided(field: &Option<String>) -> Option<String> {
    field.as_deref().filter(|s| !s.is_empty()).map(str::to_string)
}

/// Request body for creating a user (POST /users)
///
/// All three fields are required; presence is checked by `validate`, not by
/// the deserializer, so a missing field yields a 400 rather than an
/// extractor rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    /// Caller-supplied identifier
    pub id: Option<i64>,
    /// Display name
    pub name: Option<String>,
    /// Email address
    pub email: Option<String>,
}

impl CreateUserRequest {
    /// Validates field presence and builds the user record.
    ///
    /// Returns an error message if any field is missing.
    pub fn validate(&self) -> Result<User, String> {
        match (self.id, provided(&self.name), provided(&self.email)) {
            (Some(id), Some(name), Some(email)) => Ok(User::new(id, name, email)),
            _ => Err("All fields are required".to_string()),
        }
    }
}

/// Request body for updating a user (PUT /users/:id)
///
/// Both fields are optional; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    /// New display name, if any
    #[serde(default)]
    pub name: Option<String>,
    /// New email address, if any
    #[serde(default)]
    pub email: Option<String>,
}

impl UpdateUserRequest {
    /// Returns the (name, email) fields that were actually provided.
    pub fn provided_fields(&self) -> (Option<String>, Option<String>) {
        (provided(&self.name), provided(&self.email))
    }
}

/// Request body for patching a user's email (PATCH /users/:id/email)
#[derive(Debug, Clone, Deserialize)]
pub struct PatchEmailRequest {
    /// The new email address
    pub email: Option<String>,
}

impl PatchEmailRequest {
    /// Returns the email if provided, or an error message.
    pub fn validate(&self) -> Result<String, String> {
        provided(&self.email).ok_or_else(|| "Email required".to_string())
    }
}

/// Request body for patching a user's name (PATCH /users/:id/name)
#[derive(Debug, Clone, Deserialize)]
pub struct PatchNameRequest {
    /// The new display name
    pub name: Option<String>,
}

impl PatchNameRequest {
    /// Returns the name if provided, or an error message.
    pub fn validate(&self) -> Result<String, String> {
        provided(&self.name).ok_or_else(|| "Name required".to_string())
    }
}

/// Query string for name search (GET /search)
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive substring to match against names
    pub name: Option<String>,
}

impl SearchQuery {
    /// Returns the name query if provided, or an error message.
    pub fn validate(&self) -> Result<String, String> {
        provided(&self.name).ok_or_else(|| "Name query required".to_string())
    }
}

/// Query string for email domain filtering (GET /filter/domain)
#[derive(Debug, Clone, Deserialize)]
pub struct DomainQuery {
    /// Domain to match email addresses against
    pub domain: Option<String>,
}

impl DomainQuery {
    /// Returns the domain query if provided, or an error message.
    pub fn validate(&self) -> Result<String, String> {
        provided(&self.domain).ok_or_else(|| "Domain query required".to_string())
    }
}
