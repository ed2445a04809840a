//! Progress request DTOs

use serde::Deserialize;

/// Timeline query parameters
#[derive(Debug, Deserialize)]
pub struct TimelineQuery {
    /// Trailing window in days; defaults to 90
    pub days: Option<i64>,
}
