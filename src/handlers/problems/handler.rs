//! Problem catalog handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{roles, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::ProblemService,
    state::AppState,
    utils::validation::{parse_tag_filter, validate_difficulty, validate_tags},
};

use super::{
    request::{CreateProblemRequest, ListProblemsQuery, UpdateProblemRequest},
    response::{ProblemResponse, ProblemsListResponse},
};

/// Search the catalog (public, paginated)
pub async fn list_problems(
    State(state): State<AppState>,
    Query(query): Query<ListProblemsQuery>,
) -> AppResult<Json<ProblemsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

    if let Some(difficulty) = query.difficulty.as_deref() {
        validate_difficulty(difficulty).map_err(|e| AppError::Validation(e.to_string()))?;
    }

    let tags = query.tags.as_deref().and_then(parse_tag_filter);

    let (items, total) = ProblemService::list_problems(
        state.db(),
        page,
        limit,
        tags.as_deref(),
        query.difficulty.as_deref(),
        query.platform.as_deref(),
        query.q.as_deref(),
    )
    .await?;

    Ok(Json(ProblemsListResponse {
        items,
        total,
        page,
        limit,
    }))
}

/// Create a new catalog problem (admin only)
pub async fn create_problem(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateProblemRequest>,
) -> AppResult<(StatusCode, Json<ProblemResponse>)> {
    payload.validate()?;
    validate_difficulty(&payload.difficulty).map_err(|e| AppError::Validation(e.to_string()))?;
    if let Some(tags) = payload.tags.as_deref() {
        validate_tags(tags).map_err(|e| AppError::Validation(e.to_string()))?;
    }

    if auth_user.role != roles::ADMIN {
        return Err(AppError::Forbidden(
            "Only admins can create catalog problems".to_string(),
        ));
    }

    let problem = ProblemService::create_problem(state.db(), payload).await?;

    Ok((StatusCode::CREATED, Json(problem)))
}

/// Update problem metadata (requires a solved record referencing it)
pub async fn update_problem(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProblemRequest>,
) -> AppResult<Json<ProblemResponse>> {
    payload.validate()?;
    if let Some(difficulty) = payload.difficulty.as_deref() {
        validate_difficulty(difficulty).map_err(|e| AppError::Validation(e.to_string()))?;
    }
    if let Some(tags) = payload.tags.as_deref() {
        validate_tags(tags).map_err(|e| AppError::Validation(e.to_string()))?;
    }

    let problem = ProblemService::update_problem(state.db(), &id, &auth_user.id, payload).await?;

    Ok(Json(problem))
}
