//! Submission repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Submission};

/// Row in the per-contest leaderboard: accepted submissions per user
#[derive(Debug, sqlx::FromRow)]
pub struct AcceptedCount {
    pub username: String,
    pub score: i64,
}

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Create a new submission
    pub async fn create(
        pool: &PgPool,
        contest_id: &Uuid,
        problem_id: &Uuid,
        username: &str,
        language: Option<&str>,
        source_code: &str,
        status: &str,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (contest_id, problem_id, username, language, source_code, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(contest_id)
        .bind(problem_id)
        .bind(username)
        .bind(language)
        .bind(source_code)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// Find submission by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Submission>> {
        let submission =
            sqlx::query_as::<_, Submission>(r#"SELECT * FROM submissions WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(submission)
    }

    /// Update submission status, result message and completion timestamp
    pub async fn update_result(
        pool: &PgPool,
        id: &Uuid,
        status: &str,
        result_message: Option<&str>,
        finished_at: Option<DateTime<Utc>>,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE submissions
            SET status = $2, result_message = $3, finished_at = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(result_message)
        .bind(finished_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Accepted submissions per username for one contest, best first
    pub async fn accepted_counts_by_contest(
        pool: &PgPool,
        contest_id: &Uuid,
    ) -> AppResult<Vec<AcceptedCount>> {
        let counts = sqlx::query_as::<_, AcceptedCount>(
            r#"
            SELECT username, COUNT(*) AS score
            FROM submissions
            WHERE contest_id = $1 AND status = 'accepted'
            GROUP BY username
            ORDER BY score DESC, username
            "#,
        )
        .bind(contest_id)
        .fetch_all(pool)
        .await?;

        Ok(counts)
    }
}
