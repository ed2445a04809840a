//! Solved record response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::db::repositories::solved_repo::SolvedWithProblem;

/// Confirmation of a recorded solve
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSolvedResponse {
    pub message: String,
    pub solved_id: Uuid,
}

/// Problem metadata embedded in a solved listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolvedProblemInfo {
    pub id: Uuid,
    pub problem_id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub difficulty: String,
    pub platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One solved record joined with its problem
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolvedItemResponse {
    pub id: Uuid,
    pub solved_at: DateTime<Utc>,
    pub problem: SolvedProblemInfo,
}

impl From<SolvedWithProblem> for SolvedItemResponse {
    fn from(row: SolvedWithProblem) -> Self {
        Self {
            id: row.id,
            solved_at: row.solved_at,
            problem: SolvedProblemInfo {
                id: row.problem_uuid,
                problem_id: row.problem_id,
                title: row.title,
                tags: row.tags,
                difficulty: row.difficulty,
                platform: row.platform,
                url: row.url,
            },
        }
    }
}

/// Paginated solved listing
#[derive(Debug, Serialize)]
pub struct SolvedListResponse {
    pub items: Vec<SolvedItemResponse>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_item_embeds_problem() {
        let item = SolvedItemResponse::from(SolvedWithProblem {
            id: Uuid::nil(),
            solved_at: Utc::now(),
            problem_uuid: Uuid::nil(),
            problem_id: "LC-1".to_string(),
            title: "Two Sum".to_string(),
            tags: vec!["array".to_string()],
            difficulty: "Easy".to_string(),
            platform: "LeetCode".to_string(),
            url: None,
        });

        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("solvedAt").is_some());
        assert_eq!(json["problem"]["problemId"], "LC-1");
        assert_eq!(json["problem"]["difficulty"], "Easy");
    }
}
