//! Problem catalog request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_PLATFORM_LENGTH, MAX_PROBLEM_ID_LENGTH, MAX_PROBLEM_TITLE_LENGTH};

/// Create problem request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProblemRequest {
    /// External identifier, e.g. "LC-1"; unique and immutable
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
}

/// Update problem request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProblemRequest {
    #[validate(length(min = 1, max = MAX_PROBLEM_TITLE_LENGTH))]
    pub title: Option<String>,

    pub tags: Option<Vec<String>>,

    pub difficulty: Option<String>,

    #[validate(length(min = 1, max = MAX_PLATFORM_LENGTH))]
    pub platform: Option<String>,

    #[validate(url)]
    pub url: Option<String>,
}

/// List problems query parameters
#[derive(Debug, Deserialize)]
pub struct ListProblemsQuery {
    /// Comma-separated tag filter; a problem matches on any overlap
    pub tags: Option<String>,
    pub difficulty: Option<String>,
    pub platform: Option<String>,
    /// Case-insensitive substring match on the title
    pub q: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}
