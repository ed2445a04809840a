//! Solved record handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::SolvedService,
    state::AppState,
    utils::{
        time::parse_datetime,
        validation::{parse_tag_filter, validate_difficulty, validate_tags},
    },
};

use super::{
    request::{AddSolvedRequest, ListSolvedQuery},
    response::{AddSolvedResponse, SolvedListResponse},
};

/// Record a solve, creating the catalog problem if needed
pub async fn add_solved(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<AddSolvedRequest>,
) -> AppResult<(StatusCode, Json<AddSolvedResponse>)> {
    payload.validate()?;
    validate_difficulty(&payload.difficulty).map_err(|e| AppError::Validation(e.to_string()))?;
    if let Some(tags) = payload.tags.as_deref() {
        validate_tags(tags).map_err(|e| AppError::Validation(e.to_string()))?;
    }

    let solved_at = match payload.date_solved.as_deref() {
        Some(raw) => Some(
            parse_datetime(raw)
                .ok_or_else(|| AppError::Validation("dateSolved must be ISO 8601".to_string()))?,
        ),
        None => None,
    };

    let record = SolvedService::add_solved(state.db(), &auth_user.id, payload, solved_at).await?;

    Ok((
        StatusCode::CREATED,
        Json(AddSolvedResponse {
            message: "Recorded".to_string(),
            solved_id: record.id,
        }),
    ))
}

/// List the caller's solves (paginated, joined with problem metadata)
pub async fn list_solved(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListSolvedQuery>,
) -> AppResult<Json<SolvedListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

    if let Some(difficulty) = query.difficulty.as_deref() {
        validate_difficulty(difficulty).map_err(|e| AppError::Validation(e.to_string()))?;
    }

    let tags = query.tags.as_deref().and_then(parse_tag_filter);

    let (items, total) = SolvedService::list_solved(
        state.db(),
        &auth_user.id,
        page,
        limit,
        tags.as_deref(),
        query.difficulty.as_deref(),
    )
    .await?;

    Ok(Json(SolvedListResponse {
        items,
        total,
        page,
        limit,
    }))
}

/// Delete one of the caller's solved records
pub async fn delete_solved(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    SolvedService::delete_solved(state.db(), &auth_user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
