//! User Store Module
//!
//! Owns the in-memory user collection and all operations over it.

use crate::store::User;

// == User Store ==
/// In-memory user collection, insertion-order preserved.
///
/// The store itself has no failure modes: absence is reported as `None` or
/// `false`, never as an error. Presence and uniqueness validation is the
/// handler layer's responsibility.
#[derive(Debug, Default)]
pub struct UserStore {
    /// The live collection, in insertion order
    users: Vec<User>,
}

impl UserStore {
    // == Constructors ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Creates a store pre-populated with the three seed records used at
    /// process start.
    pub fn with_seed_users() -> Self {
        Self {
            users: vec![
                User::new(1, "Alice Johnson", "alice@example.com"),
                User::new(2, "Bob Smith", "bob@example.com"),
                User::new(3, "Charlie Brown", "charlie@example.com"),
            ],
        }
    }

    // == Find By Id ==
    /// Returns the first user with the given id, if any.
    ///
    /// Id uniqueness is not enforced on insert, so with duplicate ids this
    /// returns the earliest-inserted match.
    pub fn find_by_id(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    // == Email Exists ==
    /// Checks whether any user carries exactly this email (case-sensitive).
    pub fn email_exists(&self, email: &str) -> bool {
        self.users.iter().any(|u| u.email == email)
    }

    // == Create ==
    /// Appends a user to the end of the collection and returns a copy of it.
    ///
    /// Performs no presence or uniqueness checks; callers validate first.
    pub fn create(&mut self, user: User) -> User {
        self.users.push(user.clone());
        user
    }

    // == Update ==
    /// Applies the supplied fields to the user with the given id.
    ///
    /// `None` fields are left unchanged. Returns the updated record, or
    /// `None` if no user matches the id.
    pub fn update(&mut self, id: i64, name: Option<String>, email: Option<String>) -> Option<&User> {
        let user = self.users.iter_mut().find(|u| u.id == id)?;
        if let Some(name) = name {
            user.name = name;
        }
        if let Some(email) = email {
            user.email = email;
        }
        Some(user)
    }

    // == Remove ==
    /// Removes all users with the given id.
    ///
    /// Returns whether anything was removed; the order of the remaining
    /// users is preserved.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        self.users.len() != before
    }

    // == Clear ==
    /// Replaces the collection with an empty one.
    pub fn clear(&mut self) {
        self.users.clear();
    }

    // == Read Helpers ==
    /// Returns the full collection in insertion order.
    pub fn all(&self) -> &[User] {
        &self.users
    }

    /// Returns the first user in sequence order.
    pub fn first(&self) -> Option<&User> {
        self.users.first()
    }

    /// Returns the last user in sequence order.
    pub fn last(&self) -> Option<&User> {
        self.users.last()
    }

    /// Returns the current number of users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns true if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    // == Search ==
    /// Returns users whose name contains `query`, case-insensitively,
    /// in sequence order.
    pub fn search_by_name(&self, query: &str) -> Vec<User> {
        self.users
            .iter()
            .filter(|u| u.name_contains(query))
            .cloned()
            .collect()
    }

    // == Domain Filter ==
    /// Returns users whose email belongs to `domain`, in sequence order.
    pub fn filter_by_domain(&self, domain: &str) -> Vec<User> {
        self.users
            .iter()
            .filter(|u| u.email_in_domain(domain))
            .cloned()
            .collect()
    }
}
