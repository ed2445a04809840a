//! Solved record request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_PLATFORM_LENGTH, MAX_PROBLEM_ID_LENGTH, MAX_PROBLEM_TITLE_LENGTH};

/// Record-a-solve request
///
/// Carries full problem metadata so the catalog entry can be created when
/// the external identifier is not yet known.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddSolvedRequest {
    #[validate(length(min = 1, max = MAX_PROBLEM_ID_LENGTH))]
    pub problem_id: String,

    #[validate(length(min = 1, max = MAX_PROBLEM_TITLE_LENGTH))]
    pub title: String,

    pub tags: Option<Vec<String>>,

    pub difficulty: String,

    #[validate(length(min = 1, max = MAX_PLATFORM_LENGTH))]
    pub platform: String,

    #[validate(url)]
    pub url: Option<String>,

    /// Optional ISO 8601 solve date; defaults to now
    pub date_solved: Option<String>,
}

/// List solved records query parameters
#[derive(Debug, Deserialize)]
pub struct ListSolvedQuery {
    /// Comma-separated tag filter on the referenced problem
    pub tags: Option<String>,
    pub difficulty: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}
