//! Problem catalog repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Problem};

/// Repository for problem database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Create a new catalog problem
    pub async fn create(
        pool: &PgPool,
        problem_id: &str,
        title: &str,
        tags: &[String],
        difficulty: &str,
        platform: &str,
        url: Option<&str>,
    ) -> AppResult<Problem> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            INSERT INTO problems (problem_id, title, tags, difficulty, platform, url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(problem_id)
        .bind(title)
        .bind(tags)
        .bind(difficulty)
        .bind(platform)
        .bind(url)
        .fetch_one(pool)
        .await?;

        Ok(problem)
    }

    /// Find problem by internal ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }

    /// Find problem by its external identifier (e.g. "LC-1")
    pub async fn find_by_external_id(pool: &PgPool, problem_id: &str) -> AppResult<Option<Problem>> {
        let problem =
            sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE problem_id = $1"#)
                .bind(problem_id)
                .fetch_optional(pool)
                .await?;

        Ok(problem)
    }

    /// Update problem metadata (the external identifier is immutable)
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        tags: Option<&[String]>,
        difficulty: Option<&str>,
        platform: Option<&str>,
        url: Option<&str>,
    ) -> AppResult<Problem> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            UPDATE problems
            SET
                title = COALESCE($2, title),
                tags = COALESCE($3, tags),
                difficulty = COALESCE($4, difficulty),
                platform = COALESCE($5, platform),
                url = COALESCE($6, url),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(tags)
        .bind(difficulty)
        .bind(platform)
        .bind(url)
        .fetch_one(pool)
        .await?;

        Ok(problem)
    }

    /// List catalog problems with filters and pagination, newest first
    ///
    /// `tags` filters by overlap: a problem matches when it carries at least
    /// one of the given tags.
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        tags: Option<&[String]>,
        difficulty: Option<&str>,
        platform: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<(Vec<Problem>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let problems = sqlx::query_as::<_, Problem>(
            r#"
            SELECT * FROM problems
            WHERE
                ($1::text[] IS NULL OR tags && $1)
                AND ($2::text IS NULL OR difficulty = $2)
                AND ($3::text IS NULL OR platform = $3)
                AND ($4::text IS NULL OR title ILIKE $4)
            ORDER BY created_at DESC
            OFFSET $5 LIMIT $6
            "#,
        )
        .bind(tags)
        .bind(difficulty)
        .bind(platform)
        .bind(&search_pattern)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM problems
            WHERE
                ($1::text[] IS NULL OR tags && $1)
                AND ($2::text IS NULL OR difficulty = $2)
                AND ($3::text IS NULL OR platform = $3)
                AND ($4::text IS NULL OR title ILIKE $4)
            "#,
        )
        .bind(tags)
        .bind(difficulty)
        .bind(platform)
        .bind(&search_pattern)
        .fetch_one(pool)
        .await?;

        Ok((problems, count))
    }

    /// Most recently created catalog problems
    pub async fn newest(pool: &PgPool, limit: i64) -> AppResult<Vec<Problem>> {
        let problems = sqlx::query_as::<_, Problem>(
            r#"SELECT * FROM problems ORDER BY created_at DESC, id DESC LIMIT $1"#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(problems)
    }

    /// Count total problems
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM problems"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
