//! Solved record repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{error::AppResult, models::SolvedRecord};

/// A solved record joined with the metadata of the problem it references
#[derive(Debug, Clone, FromRow)]
pub struct SolvedWithProblem {
    pub id: Uuid,
    pub solved_at: DateTime<Utc>,
    pub problem_uuid: Uuid,
    pub problem_id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub difficulty: String,
    pub platform: String,
    pub url: Option<String>,
}

/// Repository for solved record database operations
pub struct SolvedRepository;

impl SolvedRepository {
    /// Record a solve
    ///
    /// The `UNIQUE (user_id, problem_id)` constraint rejects a second record
    /// for the same pair; the violation surfaces as a conflict error.
    pub async fn create(
        pool: &PgPool,
        user_id: &Uuid,
        problem_id: &Uuid,
        solved_at: DateTime<Utc>,
    ) -> AppResult<SolvedRecord> {
        let record = sqlx::query_as::<_, SolvedRecord>(
            r#"
            INSERT INTO solved_records (user_id, problem_id, solved_at)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(problem_id)
        .bind(solved_at)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Find solved record by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<SolvedRecord>> {
        let record =
            sqlx::query_as::<_, SolvedRecord>(r#"SELECT * FROM solved_records WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(record)
    }

    /// Delete a solved record
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM solved_records WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Whether the user has a solved record referencing the problem
    pub async fn exists_for_problem(
        pool: &PgPool,
        user_id: &Uuid,
        problem_id: &Uuid,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS (SELECT 1 FROM solved_records WHERE user_id = $1 AND problem_id = $2)"#,
        )
        .bind(user_id)
        .bind(problem_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Internal IDs of every problem the user has solved
    pub async fn solved_problem_ids(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<Uuid>> {
        let ids: Vec<Uuid> =
            sqlx::query_scalar(r#"SELECT problem_id FROM solved_records WHERE user_id = $1"#)
                .bind(user_id)
                .fetch_all(pool)
                .await?;

        Ok(ids)
    }

    /// Count the user's solved records
    pub async fn count_for_user(pool: &PgPool, user_id: &Uuid) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM solved_records WHERE user_id = $1"#)
                .bind(user_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }

    /// List the user's solves joined with problem metadata, newest solve first
    ///
    /// Filters apply to the referenced problem: exact difficulty match and
    /// tag overlap.
    pub async fn list_with_problem(
        pool: &PgPool,
        user_id: &Uuid,
        offset: i64,
        limit: i64,
        tags: Option<&[String]>,
        difficulty: Option<&str>,
    ) -> AppResult<(Vec<SolvedWithProblem>, i64)> {
        let items = sqlx::query_as::<_, SolvedWithProblem>(
            r#"
            SELECT
                s.id,
                s.solved_at,
                p.id AS problem_uuid,
                p.problem_id,
                p.title,
                p.tags,
                p.difficulty,
                p.platform,
                p.url
            FROM solved_records s
            JOIN problems p ON p.id = s.problem_id
            WHERE
                s.user_id = $1
                AND ($2::text[] IS NULL OR p.tags && $2)
                AND ($3::text IS NULL OR p.difficulty = $3)
            ORDER BY s.solved_at DESC
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(user_id)
        .bind(tags)
        .bind(difficulty)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM solved_records s
            JOIN problems p ON p.id = s.problem_id
            WHERE
                s.user_id = $1
                AND ($2::text[] IS NULL OR p.tags && $2)
                AND ($3::text IS NULL OR p.difficulty = $3)
            "#,
        )
        .bind(user_id)
        .bind(tags)
        .bind(difficulty)
        .fetch_one(pool)
        .await?;

        Ok((items, count))
    }
}
