//! Contest response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Problem;

/// Contest with its ordered problems
#[derive(Debug, Serialize)]
pub struct ContestResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub problems: Vec<ProblemSummary>,
}

/// Problem as shown to participants; test case data is never exposed
#[derive(Debug, Serialize)]
pub struct ProblemSummary {
    pub id: Uuid,
    pub title: String,
    pub statement: String,
    pub position: i32,
}

impl From<Problem> for ProblemSummary {
    fn from(problem: Problem) -> Self {
        Self {
            id: problem.id,
            title: problem.title,
            statement: problem.statement,
            position: problem.position,
        }
    }
}

/// One leaderboard row
#[derive(Debug, Serialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: i64,
}
