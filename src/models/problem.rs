//! Problem model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::TestCase;

/// Problem database model
///
/// `test_cases` is populated by the repository in evaluation order; the rows
/// themselves live in the `test_cases` table keyed by (problem_id, position).
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Problem {
    pub id: Uuid,
    pub contest_id: Uuid,
    pub title: String,
    pub statement: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    #[sqlx(skip)]
    #[serde(default, skip_serializing)]
    pub test_cases: Vec<TestCase>,
}
