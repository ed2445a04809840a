//! User profile request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{
    MAX_PASSWORD_LENGTH, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH,
};

/// Profile update request
///
/// Every field is optional; absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = MIN_USERNAME_LENGTH, max = MAX_USERNAME_LENGTH))]
    pub username: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(range(min = 0))]
    pub weekly_goal: Option<i32>,

    #[validate(range(min = 0))]
    pub monthly_goal: Option<i32>,

    #[validate(range(min = 0))]
    pub easy_goal: Option<i32>,

    #[validate(range(min = 0))]
    pub medium_goal: Option<i32>,

    pub theme: Option<String>,
}

/// Password change request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1))]
    pub current_password: String,

    #[validate(length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH))]
    pub new_password: String,
}
