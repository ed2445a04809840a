//! Recommendation handler implementations

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::RecommendationService,
    state::AppState,
};

use super::response::RecommendationsResponse;

/// Recommend unsolved problems matching the caller's most-practiced tags
pub async fn recommend_next(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<RecommendationsResponse>> {
    let recommendations = RecommendationService::recommend_next(state.db(), &auth_user.id).await?;
    Ok(Json(recommendations))
}
