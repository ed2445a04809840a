//! Recommendation response DTOs

use serde::Serialize;

use crate::handlers::problems::response::ProblemResponse;

/// Recommended next problems
///
/// `tags_used` is empty on the no-history fallback path.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    pub tags_used: Vec<String>,
    pub items: Vec<ProblemResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_wire_format() {
        let response = RecommendationsResponse {
            tags_used: Vec::new(),
            items: Vec::new(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["tagsUsed"], serde_json::json!([]));
        assert_eq!(json["items"], serde_json::json!([]));
    }
}
