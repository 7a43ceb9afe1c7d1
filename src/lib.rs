//! User API - An in-memory user management REST API
//!
//! Exposes CRUD, search, filter, and summary endpoints over a single
//! in-memory user collection.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
