//! Shodhcode - Personal Coding-Practice Tracker
//!
//! This library provides the backend for Shodhcode, a personal tracker for
//! solved programming problems with progress analytics and tag-based
//! recommendations.
//!
//! # Features
//!
//! - Solve logging with an auto-growing problem catalog
//! - Progress summary (totals, per-difficulty and per-tag breakdowns)
//! - Day-bucketed solve timeline over a trailing window
//! - Tag-frequency recommendations with a newest-problems fallback
//! - Bearer-token authentication and per-user goals
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
