//! Problem catalog service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{ProblemRepository, SolvedRepository},
    error::{AppError, AppResult},
    handlers::problems::{
        request::{CreateProblemRequest, UpdateProblemRequest},
        response::ProblemResponse,
    },
};

/// Problem service for business logic
pub struct ProblemService;

impl ProblemService {
    /// List catalog problems with filters and pagination
    pub async fn list_problems(
        pool: &PgPool,
        page: u32,
        limit: u32,
        tags: Option<&[String]>,
        difficulty: Option<&str>,
        platform: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<(Vec<ProblemResponse>, i64)> {
        let offset = ((page - 1) * limit) as i64;

        let (problems, total) = ProblemRepository::list(
            pool,
            offset,
            limit as i64,
            tags,
            difficulty,
            platform,
            search,
        )
        .await?;

        Ok((problems.into_iter().map(ProblemResponse::from).collect(), total))
    }

    /// Create a new catalog problem
    pub async fn create_problem(
        pool: &PgPool,
        payload: CreateProblemRequest,
    ) -> AppResult<ProblemResponse> {
        if ProblemRepository::find_by_external_id(pool, &payload.problem_id)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists("Problem already exists".to_string()));
        }

        let problem = ProblemRepository::create(
            pool,
            &payload.problem_id,
            &payload.title,
            &payload.tags.unwrap_or_default(),
            &payload.difficulty,
            &payload.platform,
            payload.url.as_deref(),
        )
        .await?;

        Ok(ProblemResponse::from(problem))
    }

    /// Update problem metadata
    ///
    /// Permitted only for users holding a solved record that references the
    /// problem (ownership-via-solve); there is no admin bypass.
    pub async fn update_problem(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        payload: UpdateProblemRequest,
    ) -> AppResult<ProblemResponse> {
        let problem = ProblemRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        if !SolvedRepository::exists_for_problem(pool, requester_id, &problem.id).await? {
            return Err(AppError::Forbidden(
                "Only users who solved this problem can edit it".to_string(),
            ));
        }

        let updated = ProblemRepository::update(
            pool,
            id,
            payload.title.as_deref(),
            payload.tags.as_deref(),
            payload.difficulty.as_deref(),
            payload.platform.as_deref(),
            payload.url.as_deref(),
        )
        .await?;

        Ok(ProblemResponse::from(updated))
    }
}
