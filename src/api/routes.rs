//! API Routes
//!
//! Configures the Axum router with all user API endpoints.

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    count_handler, create_user_handler, delete_all_users_handler, delete_user_handler,
    filter_domain_handler, first_user_handler, get_user_handler, health_handler,
    last_user_handler, list_users_handler, patch_email_handler, patch_name_handler, root_handler,
    search_users_handler, summary_handler, update_user_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Welcome message
/// - `POST /users` - Create a user
/// - `GET /users` - List all users
/// - `DELETE /users` - Delete all users
/// - `GET /users/first` - First user in sequence order
/// - `GET /users/last` - Last user in sequence order
/// - `GET /users/:id` - Get a user by id
/// - `PUT /users/:id` - Update a user's fields
/// - `DELETE /users/:id` - Delete a user
/// - `PATCH /users/:id/email` - Update only the email
/// - `PATCH /users/:id/name` - Update only the name
/// - `GET /search?name=` - Search users by name
/// - `GET /filter/domain?domain=` - Filter users by email domain
/// - `GET /stats/count` - Current user count
/// - `GET /stats/summary` - Count plus first/last records
/// - `GET /health` - Health check endpoint
///
/// The static `/users/first` and `/users/last` segments take precedence
/// over the `/users/:id` capture.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/", get(root_handler))
        .route(
            "/users",
            get(list_users_handler)
                .post(create_user_handler)
                .delete(delete_all_users_handler),
        )
        .route("/users/first", get(first_user_handler))
        .route("/users/last", get(last_user_handler))
        .route(
            "/users/:id",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route("/users/:id/email", patch(patch_email_handler))
        .route("/users/:id/name", patch(patch_name_handler))
        .route("/search", get(search_users_handler))
        .route("/filter/domain", get(filter_domain_handler))
        .route("/stats/count", get(count_handler))
        .route("/stats/summary", get(summary_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
