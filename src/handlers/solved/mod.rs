//! Solved record handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

/// Solved record routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::add_solved))
        .route("/", get(handler::list_solved))
        .route("/{id}", delete(handler::delete_solved))
}
