//! Progress aggregation handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Progress routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/summary", get(handler::summary))
        .route("/timeline", get(handler::timeline))
}
