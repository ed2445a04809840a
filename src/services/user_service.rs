//! User service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
    services::AuthService,
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, id: &Uuid) -> AppResult<User> {
        UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Update the user's own profile
    ///
    /// A duplicate username or email surfaces as a conflict from the store's
    /// unique constraints.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_profile(
        pool: &PgPool,
        id: &Uuid,
        username: Option<&str>,
        email: Option<&str>,
        weekly_goal: Option<i32>,
        monthly_goal: Option<i32>,
        easy_goal: Option<i32>,
        medium_goal: Option<i32>,
        theme: Option<&str>,
    ) -> AppResult<User> {
        let email = email.map(|e| e.trim().to_lowercase());

        UserRepository::update_profile(
            pool,
            id,
            username,
            email.as_deref(),
            weekly_goal,
            monthly_goal,
            easy_goal,
            medium_goal,
            theme,
        )
        .await
    }

    /// Change the user's password after verifying the current one
    pub async fn change_password(
        pool: &PgPool,
        id: &Uuid,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let user = Self::get_user_by_id(pool, id).await?;

        if !AuthService::verify_password(current_password, &user.password_hash)? {
            return Err(AppError::InvalidInput(
                "Current password incorrect".to_string(),
            ));
        }

        let password_hash = AuthService::hash_password(new_password)?;
        UserRepository::update_password(pool, id, &password_hash).await
    }
}
