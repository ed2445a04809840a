//! User profile response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::User;

/// Full profile response (never includes the password hash)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: String,
    pub weekly_goal: i32,
    pub monthly_goal: i32,
    pub easy_goal: i32,
    pub medium_goal: i32,
    pub theme: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            weekly_goal: user.weekly_goal,
            monthly_goal: user.monthly_goal,
            easy_goal: user.easy_goal,
            medium_goal: user.medium_goal,
            theme: user.theme,
            created_at: user.created_at,
        }
    }
}

/// Password change confirmation
#[derive(Debug, Serialize)]
pub struct PasswordChangedResponse {
    pub message: String,
}
