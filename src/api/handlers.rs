//! API Handlers
//!
//! HTTP request handlers for each user API endpoint.
//!
//! Mutating handlers hold the store's write lock across their full
//! check-then-act sequence (existence/uniqueness check, then mutation), so
//! the uniqueness invariant cannot race across requests.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{
    CountResponse, CreateUserRequest, DomainQuery, HealthResponse, MessageResponse,
    PatchEmailRequest, PatchNameRequest, SearchQuery, SummaryResponse, UpdateUserRequest,
};
use crate::store::{User, UserStore};

/// Application state shared across all handlers.
///
/// Contains the user store wrapped in Arc<RwLock<>> for thread-safe access.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe user store
    pub store: Arc<RwLock<UserStore>>,
}

impl AppState {
    /// Creates a new AppState with the given user store.
    pub fn new(store: UserStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Creates a new AppState pre-populated with the seed users.
    pub fn seeded() -> Self {
        Self::new(UserStore::with_seed_users())
    }
}

/// Parses a raw path segment as a user id.
///
/// Non-numeric input matches no user, so lookups on malformed ids report
/// not-found instead of a parse error.
fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

fn user_not_found() -> ApiError {
    ApiError::NotFound("User not found".to_string())
}

fn no_users_found() -> ApiError {
    ApiError::NotFound("No users found".to_string())
}

/// Handler for GET /
///
/// Returns the welcome message.
pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the User API"))
}

/// Handler for POST /users
///
/// Creates a user after checking field presence and email uniqueness.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>)> {
    let user = req.validate().map_err(ApiError::Validation)?;

    let mut store = state.store.write().await;
    if store.email_exists(&user.email) {
        return Err(ApiError::Validation("Email already exists".to_string()));
    }

    let created = store.create(user);
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for GET /users
///
/// Returns the full collection in insertion order.
pub async fn list_users_handler(State(state): State<AppState>) -> Json<Vec<User>> {
    let store = state.store.read().await;
    Json(store.all().to_vec())
}

/// Handler for GET /users/first
pub async fn first_user_handler(State(state): State<AppState>) -> Result<Json<User>> {
    let store = state.store.read().await;
    let user = store.first().ok_or_else(no_users_found)?;
    Ok(Json(user.clone()))
}

/// Handler for GET /users/last
pub async fn last_user_handler(State(state): State<AppState>) -> Result<Json<User>> {
    let store = state.store.read().await;
    let user = store.last().ok_or_else(no_users_found)?;
    Ok(Json(user.clone()))
}

/// Handler for GET /users/:id
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>> {
    let store = state.store.read().await;
    let user = parse_id(&id)
        .and_then(|id| store.find_by_id(id))
        .ok_or_else(user_not_found)?;
    Ok(Json(user.clone()))
}

/// Handler for PUT /users/:id
///
/// Applies the provided fields to an existing user. A provided email that
/// already belongs to a different record is rejected; re-supplying the
/// record's own email is allowed.
pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<User>> {
    let (name, email) = req.provided_fields();

    let mut store = state.store.write().await;
    let id = parse_id(&id).ok_or_else(user_not_found)?;
    let current_email = store.find_by_id(id).ok_or_else(user_not_found)?.email.clone();

    if let Some(email) = &email {
        if *email != current_email && store.email_exists(email) {
            return Err(ApiError::Validation("Email already in use".to_string()));
        }
    }

    let user = store.update(id, name, email).ok_or_else(user_not_found)?;
    Ok(Json(user.clone()))
}

/// Handler for DELETE /users/:id
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let mut store = state.store.write().await;
    let removed = parse_id(&id).map(|id| store.remove(id)).unwrap_or(false);
    if !removed {
        return Err(user_not_found());
    }
    Ok(Json(MessageResponse::new("User deleted")))
}

/// Handler for DELETE /users
///
/// Clears the collection. Succeeds even when already empty.
pub async fn delete_all_users_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    let mut store = state.store.write().await;
    store.clear();
    Json(MessageResponse::new("All users deleted"))
}

/// Handler for GET /stats/count
pub async fn count_handler(State(state): State<AppState>) -> Json<CountResponse> {
    let store = state.store.read().await;
    Json(CountResponse::new(store.len()))
}

/// Handler for GET /search
///
/// Returns users whose name contains the query, case-insensitively.
pub async fn search_users_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<User>>> {
    let name = query.validate().map_err(ApiError::Validation)?;

    let store = state.store.read().await;
    Ok(Json(store.search_by_name(&name)))
}

/// Handler for GET /filter/domain
///
/// Returns users whose email ends with `@<domain>`.
pub async fn filter_domain_handler(
    State(state): State<AppState>,
    Query(query): Query<DomainQuery>,
) -> Result<Json<Vec<User>>> {
    let domain = query.validate().map_err(ApiError::Validation)?;

    let store = state.store.read().await;
    Ok(Json(store.filter_by_domain(&domain)))
}

/// Handler for PATCH /users/:id/email
///
/// Existence is checked before the body, so a missing email on an unknown
/// user reports 404 rather than 400.
pub async fn patch_email_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<PatchEmailRequest>,
) -> Result<Json<User>> {
    let mut store = state.store.write().await;
    let id = parse_id(&id).ok_or_else(user_not_found)?;
    let current_email = store.find_by_id(id).ok_or_else(user_not_found)?.email.clone();

    let email = req.validate().map_err(ApiError::Validation)?;
    if email != current_email && store.email_exists(&email) {
        return Err(ApiError::Validation("Email exists".to_string()));
    }

    let user = store.update(id, None, Some(email)).ok_or_else(user_not_found)?;
    Ok(Json(user.clone()))
}

/// Handler for PATCH /users/:id/name
pub async fn patch_name_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<PatchNameRequest>,
) -> Result<Json<User>> {
    let mut store = state.store.write().await;
    let id = parse_id(&id).ok_or_else(user_not_found)?;
    store.find_by_id(id).ok_or_else(user_not_found)?;

    let name = req.validate().map_err(ApiError::Validation)?;

    let user = store.update(id, Some(name), None).ok_or_else(user_not_found)?;
    Ok(Json(user.clone()))
}

/// Handler for GET /stats/summary
///
/// Returns the total count plus the first and last records (null when the
/// collection is empty).
pub async fn summary_handler(State(state): State<AppState>) -> Json<SummaryResponse> {
    let store = state.store.read().await;
    Json(SummaryResponse::new(
        store.len(),
        store.first().cloned(),
        store.last().cloned(),
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
