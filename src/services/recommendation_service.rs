//! Recommendation service
//!
//! Frequency-count recommendation: the user's most-practiced tags select
//! unsolved catalog problems. No scoring, no recency weighting; the scale of
//! a personal tracker does not call for more.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::{RECOMMEND_FALLBACK_LIMIT, RECOMMEND_RESULT_LIMIT, RECOMMEND_TAG_LIMIT},
    db::repositories::{ProblemRepository, SolvedRepository},
    error::AppResult,
    handlers::problems::response::ProblemResponse,
    handlers::recommendations::response::RecommendationsResponse,
    models::Problem,
};

/// Recommendation service
pub struct RecommendationService;

impl RecommendationService {
    /// Recommend unsolved problems matching the user's top-10 tags
    ///
    /// The tag cap is 10, distinct from the summary's 20. A user with no
    /// solve history gets the 10 newest catalog problems instead, so the
    /// response is only empty when the catalog is. Matches are capped at 20
    /// and ordered by catalog insertion order.
    pub async fn recommend_next(pool: &PgPool, user_id: &Uuid) -> AppResult<RecommendationsResponse> {
        let top_tags: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT t.tag
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
        .bind(RECOMMEND_TAG_LIMIT)
        .fetch_all(pool)
        .await?;

        if top_tags.is_empty() {
            let fallback = ProblemRepository::newest(pool, RECOMMEND_FALLBACK_LIMIT).await?;
            return Ok(RecommendationsResponse {
                tags_used: Vec::new(),
                items: fallback.into_iter().map(ProblemResponse::from).collect(),
            });
        }

        let solved_ids = SolvedRepository::solved_problem_ids(pool, user_id).await?;

        let items = sqlx::query_as::<_, Problem>(
            r#"
            SELECT * FROM problems
            WHERE tags && $1 AND NOT (id = ANY($2))
            ORDER BY created_at ASC, id ASC
            LIMIT $3
            "#,
        )
        .bind(&top_tags)
        .bind(&solved_ids)
        .bind(RECOMMEND_RESULT_LIMIT)
        .fetch_all(pool)
        .await?;

        Ok(RecommendationsResponse {
            tags_used: top_tags,
            items: items.into_iter().map(ProblemResponse::from).collect(),
        })
    }
}
