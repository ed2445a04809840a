//! Progress handler implementations

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    constants::{DEFAULT_TIMELINE_DAYS, MAX_TIMELINE_DAYS},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::ProgressService,
    state::AppState,
};

use super::{
    request::TimelineQuery,
    response::{SummaryResponse, TimelineResponse},
};

/// Solve summary for the caller
pub async fn summary(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<SummaryResponse>> {
    let summary = ProgressService::summary(state.db(), &auth_user.id).await?;
    Ok(Json(summary))
}

/// Day-bucketed solve timeline for the caller
pub async fn timeline(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<TimelineQuery>,
) -> AppResult<Json<TimelineResponse>> {
    let days = query.days.unwrap_or(DEFAULT_TIMELINE_DAYS);
    if !(1..=MAX_TIMELINE_DAYS).contains(&days) {
        return Err(AppError::Validation(format!(
            "days must be between 1 and {}",
            MAX_TIMELINE_DAYS
        )));
    }

    let timeline = ProgressService::timeline(state.db(), &auth_user.id, days).await?;
    Ok(Json(timeline))
}
