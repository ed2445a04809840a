//! Solved record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A solve fact linking one user to one problem
///
/// At most one record exists per (user, problem) pair; the store enforces
/// this with a unique constraint. Records are created and deleted, never
/// updated in place.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SolvedRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub problem_id: Uuid,
    pub solved_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
