//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod auth;
pub mod health;
pub mod problems;
pub mod progress;
pub mod recommendations;
pub mod solved;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes())
        .nest("/users", users::routes())
        .nest("/problems", problems::routes())
        .nest("/solved", solved::routes())
        .nest("/progress", progress::routes())
        .nest("/recommendations", recommendations::routes())
}
