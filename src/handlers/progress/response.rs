//! Progress response DTOs

use serde::Serialize;

/// One grouped solve count (difficulty or tag bucket)
#[derive(Debug, Serialize)]
pub struct BucketCount {
    pub key: String,
    pub count: i64,
}

/// Solve summary: total plus difficulty and tag breakdowns
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub total: i64,
    pub by_difficulty: Vec<BucketCount>,
    pub by_tag: Vec<BucketCount>,
}

/// Solve count for one calendar day (UTC)
#[derive(Debug, Serialize)]
pub struct DayBucket {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub count: i64,
}

/// Day-bucketed solve timeline, ascending; gap days are absent
#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub items: Vec<DayBucket>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_wire_format() {
        let response = SummaryResponse {
            total: 3,
            by_difficulty: vec![BucketCount {
                key: "Easy".to_string(),
                count: 3,
            }],
            by_tag: vec![BucketCount {
                key: "array".to_string(),
                count: 3,
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["total"], 3);
        assert_eq!(json["byDifficulty"][0]["key"], "Easy");
        assert_eq!(json["byTag"][0]["count"], 3);
    }
}
