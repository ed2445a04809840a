//! User profile handler implementations

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::UserService,
    state::AppState,
    utils::validation::validate_theme,
};

use super::{
    request::{ChangePasswordRequest, UpdateProfileRequest},
    response::{PasswordChangedResponse, ProfileResponse},
};

/// Get the caller's profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ProfileResponse>> {
    let user = UserService::get_user_by_id(state.db(), &auth_user.id).await?;
    Ok(Json(ProfileResponse::from(user)))
}

/// Update the caller's profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<Json<ProfileResponse>> {
    payload.validate()?;

    if let Some(theme) = payload.theme.as_deref() {
        validate_theme(theme).map_err(|e| AppError::Validation(e.to_string()))?;
    }

    let user = UserService::update_profile(
        state.db(),
        &auth_user.id,
        payload.username.as_deref(),
        payload.email.as_deref(),
        payload.weekly_goal,
        payload.monthly_goal,
        payload.easy_goal,
        payload.medium_goal,
        payload.theme.as_deref(),
    )
    .await?;

    Ok(Json(ProfileResponse::from(user)))
}

/// Change the caller's password
pub async fn change_password(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<ChangePasswordRequest>,
) -> AppResult<Json<PasswordChangedResponse>> {
    payload.validate()?;

    UserService::change_password(
        state.db(),
        &auth_user.id,
        &payload.current_password,
        &payload.new_password,
    )
    .await?;

    Ok(Json(PasswordChangedResponse {
        message: "Password updated".to_string(),
    }))
}
