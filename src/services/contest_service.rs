//! Contest service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{ContestRepository, ProblemRepository, SubmissionRepository},
    error::{AppError, AppResult},
    handlers::contests::response::{ContestResponse, LeaderboardEntry, ProblemSummary},
};

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// Get a contest with its ordered problems
    pub async fn get_contest(pool: &PgPool, id: &Uuid) -> AppResult<ContestResponse> {
        let (contest, problems) = futures::try_join!(
            ContestRepository::find_by_id(pool, id),
            ProblemRepository::list_by_contest(pool, id),
        )?;

        let contest = contest.ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        Ok(ContestResponse {
            id: contest.id,
            name: contest.name,
            created_at: contest.created_at,
            problems: problems.into_iter().map(ProblemSummary::from).collect(),
        })
    }

    /// Accepted-submission count per user, best first
    pub async fn leaderboard(pool: &PgPool, contest_id: &Uuid) -> AppResult<Vec<LeaderboardEntry>> {
        if !ContestRepository::exists(pool, contest_id).await? {
            return Err(AppError::NotFound("Contest not found".to_string()));
        }

        let counts = SubmissionRepository::accepted_counts_by_contest(pool, contest_id).await?;

        Ok(counts
            .into_iter()
            .map(|row| LeaderboardEntry {
                username: row.username,
                score: row.score,
            })
            .collect())
    }
}
