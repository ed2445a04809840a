//! Solved record service

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{ProblemRepository, SolvedRepository},
    error::{AppError, AppResult},
    handlers::solved::{request::AddSolvedRequest, response::SolvedItemResponse},
    models::SolvedRecord,
    utils::time::now_utc,
};

/// Solved record service for business logic
pub struct SolvedService;

impl SolvedService {
    /// Record that the user solved a problem
    ///
    /// Creates the catalog problem first when the external identifier is
    /// unknown. A second record for the same (user, problem) pair is rejected
    /// by the store's unique constraint and surfaces as a conflict.
    pub async fn add_solved(
        pool: &PgPool,
        user_id: &Uuid,
        payload: AddSolvedRequest,
        solved_at: Option<DateTime<Utc>>,
    ) -> AppResult<SolvedRecord> {
        let problem = match ProblemRepository::find_by_external_id(pool, &payload.problem_id).await? {
            Some(problem) => problem,
            None => {
                ProblemRepository::create(
                    pool,
                    &payload.problem_id,
                    &payload.title,
                    &payload.tags.unwrap_or_default(),
                    &payload.difficulty,
                    &payload.platform,
                    payload.url.as_deref(),
                )
                .await?
            }
        };

        match SolvedRepository::create(pool, user_id, &problem.id, solved_at.unwrap_or_else(now_utc))
            .await
        {
            Err(AppError::AlreadyExists(_)) => Err(AppError::Conflict(
                "Solve already recorded for this problem".to_string(),
            )),
            other => other,
        }
    }

    /// List the user's solves joined with problem metadata
    pub async fn list_solved(
        pool: &PgPool,
        user_id: &Uuid,
        page: u32,
        limit: u32,
        tags: Option<&[String]>,
        difficulty: Option<&str>,
    ) -> AppResult<(Vec<SolvedItemResponse>, i64)> {
        let offset = ((page - 1) * limit) as i64;

        let (items, total) = SolvedRepository::list_with_problem(
            pool,
            user_id,
            offset,
            limit as i64,
            tags,
            difficulty,
        )
        .await?;

        Ok((items.into_iter().map(SolvedItemResponse::from).collect(), total))
    }

    /// Delete one of the caller's solved records
    pub async fn delete_solved(pool: &PgPool, user_id: &Uuid, record_id: &Uuid) -> AppResult<()> {
        let record = SolvedRepository::find_by_id(pool, record_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solved record not found".to_string()))?;

        if record.user_id != *user_id {
            return Err(AppError::Forbidden(
                "Cannot delete another user's solved record".to_string(),
            ));
        }

        SolvedRepository::delete(pool, record_id).await
    }
}
