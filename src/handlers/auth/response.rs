//! Authentication response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::models::User;

/// User information in auth responses
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
        }
    }
}

/// Authentication token response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// Logout response
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_auth_response_wire_format() {
        let response = AuthResponse {
            token: "jwt".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 3600,
            user: UserResponse::from(User {
                id: Uuid::nil(),
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                password_hash: "secret".to_string(),
                role: "user".to_string(),
                weekly_goal: 0,
                monthly_goal: 0,
                easy_goal: 0,
                medium_goal: 0,
                theme: "light".to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("tokenType").is_some());
        assert!(json.get("expiresIn").is_some());
        assert!(json["user"].get("password_hash").is_none());
    }
}
