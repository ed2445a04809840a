//! Progress aggregation service
//!
//! Read-only aggregations over a user's solved records. Grouping keys come
//! from the referenced problem (a join precedes every grouping), never from
//! the solved record itself. Each operation either returns the full grouped
//! result set or fails; there are no partial results.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::SUMMARY_TAG_LIMIT,
    db::repositories::SolvedRepository,
    error::{AppError, AppResult},
    handlers::progress::response::{BucketCount, DayBucket, SummaryResponse, TimelineResponse},
    utils::time::window_start,
};

#[derive(sqlx::FromRow)]
struct BucketRow {
    key: String,
    count: i64,
}

#[derive(sqlx::FromRow)]
struct DayRow {
    year: i32,
    month: i32,
    day: i32,
    count: i64,
}

/// Progress aggregation service
pub struct ProgressService;

impl ProgressService {
    /// Solve counts: total, grouped by difficulty, grouped by tag (top 20)
    ///
    /// A solve of a problem carrying N tags contributes to N tag buckets.
    /// Equal-count tag buckets order by tag ascending so the truncation is
    /// deterministic.
    pub async fn summary(pool: &PgPool, user_id: &Uuid) -> AppResult<SummaryResponse> {
        let by_difficulty = async {
            sqlx::query_as::<_, BucketRow>(
                r#"
                SELECT p.difficulty AS key, COUNT(*) AS count
                FROM solved_records s
                JOIN problems p ON p.id = s.problem_id
                WHERE s.user_id = $1
                GROUP BY p.difficulty
                ORDER BY COUNT(*) DESC, p.difficulty ASC
                "#,
            )
            .bind(user_id)
            .fetch_all(pool)
            .await
            .map_err(AppError::from)
        };

        let by_tag = async {
            sqlx::query_as::<_, BucketRow>(
                r#"
                SELECT t.tag AS key, COUNT(*) AS count
                FROM solved_records s
                JOIN problems p ON p.id = s.problem_id
                CROSS JOIN LATERAL unnest(p.tags) AS t(tag)
                WHERE s.user_id = $1
                GROUP BY t.tag
                ORDER BY COUNT(*) DESC, t.tag ASC
                LIMIT $2
                "#,
            )
            .bind(user_id)
            .bind(SUMMARY_TAG_LIMIT)
            .fetch_all(pool)
            .await
            .map_err(AppError::from)
        };

        // Independent reads; any failure fails the whole summary
        let (by_difficulty, by_tag, total) = futures::try_join!(
            by_difficulty,
            by_tag,
            SolvedRepository::count_for_user(pool, user_id),
        )?;

        Ok(SummaryResponse {
            total,
            by_difficulty: by_difficulty.into_iter().map(BucketCount::from).collect(),
            by_tag: by_tag.into_iter().map(BucketCount::from).collect(),
        })
    }

    /// Solves per calendar day over a trailing window of `days` days
    ///
    /// Days are bucketed in UTC. Only days with at least one solve are
    /// emitted, ascending; callers fill gaps themselves.
    pub async fn timeline(pool: &PgPool, user_id: &Uuid, days: i64) -> AppResult<TimelineResponse> {
        let start = window_start(days);

        let rows = sqlx::query_as::<_, DayRow>(
            r#"
            SELECT
                EXTRACT(YEAR FROM s.solved_at AT TIME ZONE 'UTC')::int AS year,
                EXTRACT(MONTH FROM s.solved_at AT TIME ZONE 'UTC')::int AS month,
                EXTRACT(DAY FROM s.solved_at AT TIME ZONE 'UTC')::int AS day,
                COUNT(*) AS count
            FROM solved_records s
            WHERE s.user_id = $1 AND s.solved_at >= $2
            GROUP BY 1, 2, 3
            ORDER BY 1, 2, 3
            "#,
        )
        .bind(user_id)
        .bind(start)
        .fetch_all(pool)
        .await?;

        Ok(TimelineResponse {
            items: rows.into_iter().map(DayBucket::from).collect(),
        })
    }
}

impl From<BucketRow> for BucketCount {
    fn from(row: BucketRow) -> Self {
        Self {
            key: row.key,
            count: row.count,
        }
    }
}

impl From<DayRow> for DayBucket {
    fn from(row: DayRow) -> Self {
        Self {
            year: row.year,
            month: row.month,
            day: row.day,
            count: row.count,
        }
    }
}
