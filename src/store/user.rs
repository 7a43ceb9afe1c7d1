//! User Record Module
//!
//! Defines the user record stored in the collection.

use serde::{Deserialize, Serialize};

// == User Record ==
/// A single user record.
///
/// The `id` is caller-supplied; `email` is intended to be unique across the
/// collection (enforced at the handler layer, not here).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Caller-supplied identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Email address, intended unique
    pub email: String,
}

impl User {
    // == Constructor ==
    /// Creates a new user record.
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    // == Name Match ==
    /// Checks whether the user's name contains `needle`, case-insensitively.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }

    // == Domain Match ==
    /// Checks whether the user's email belongs to `domain`.
    ///
    /// Matches on the email ending with `@<domain>`, exact case.
    pub fn email_in_domain(&self, domain: &str) -> bool {
        self.email.ends_with(&format!("@{}", domain))
    }
}
