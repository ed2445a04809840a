//! Authentication handler implementations

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{error::AppResult, services::AuthService, state::AppState};

use super::{
    request::{LoginRequest, RegisterRequest},
    response::{AuthResponse, LogoutResponse, UserResponse},
};

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    payload.validate()?;

    let user = AuthService::register(
        state.db(),
        state.config(),
        &payload.username,
        &payload.email,
        &payload.password,
    )
    .await?;

    let (token, expires_in) = AuthService::generate_token(&user, state.config())?;

    let response = AuthResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in,
        user: UserResponse::from(user),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let (user, token, expires_in) =
        AuthService::login(state.db(), state.config(), &payload.email, &payload.password).await?;

    let response = AuthResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in,
        user: UserResponse::from(user),
    };

    Ok(Json(response))
}

/// Logout
///
/// Tokens are stateless; the client discards its copy.
pub async fn logout() -> Json<LogoutResponse> {
    Json(LogoutResponse {
        message: "Logged out".to_string(),
    })
}
