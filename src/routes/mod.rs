pub mod auth;
pub mod health;
pub mod users;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        // Address records
        .route("/user", get(users::list_users))
        .route("/user", post(users::create_user))
        // Auth users
        .route("/auth", get(auth::list_auth_users))
        .route("/auth", post(auth::create_auth_user))
}
