//! Problem catalog response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Problem;

/// Catalog problem response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemResponse {
    pub id: Uuid,
    pub problem_id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub difficulty: String,
    pub platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Problem> for ProblemResponse {
    fn from(problem: Problem) -> Self {
        Self {
            id: problem.id,
            problem_id: problem.problem_id,
            title: problem.title,
            tags: problem.tags,
            difficulty: problem.difficulty,
            platform: problem.platform,
            url: problem.url,
            created_at: problem.created_at,
            updated_at: problem.updated_at,
        }
    }
}

/// Paginated catalog listing
#[derive(Debug, Serialize)]
pub struct ProblemsListResponse {
    pub items: Vec<ProblemResponse>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_response_wire_format() {
        let response = ProblemResponse::from(Problem {
            id: Uuid::nil(),
            problem_id: "LC-1".to_string(),
            title: "Two Sum".to_string(),
            tags: vec!["array".to_string(), "hash-table".to_string()],
            difficulty: "Easy".to_string(),
            platform: "LeetCode".to_string(),
            url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["problemId"], "LC-1");
        assert!(json.get("createdAt").is_some());
        // Absent url is omitted entirely
        assert!(json.get("url").is_none());
    }
}
