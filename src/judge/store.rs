//! Verdict persistence boundary
//!
//! The runner loads and saves submissions through this trait rather than
//! touching the database directly, so judging logic can be exercised against
//! an in-memory store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{ProblemRepository, SubmissionRepository},
    error::AppResult,
    models::{Problem, Submission},
};

/// Persistence boundary used by the judging pipeline
#[async_trait]
pub trait VerdictStore: Send + Sync {
    /// Load a submission by ID
    async fn find_submission(&self, id: Uuid) -> AppResult<Option<Submission>>;

    /// Persist a submission's status, result message and completion timestamp
    async fn save_submission(&self, submission: &Submission) -> AppResult<()>;

    /// Load a problem by ID with its test cases in evaluation order
    async fn find_problem(&self, id: Uuid) -> AppResult<Option<Problem>>;
}

/// Postgres-backed verdict store delegating to the repository layer
pub struct PgVerdictStore {
    pool: PgPool,
}

impl PgVerdictStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VerdictStore for PgVerdictStore {
    async fn find_submission(&self, id: Uuid) -> AppResult<Option<Submission>> {
        SubmissionRepository::find_by_id(&self.pool, &id).await
    }

    async fn save_submission(&self, submission: &Submission) -> AppResult<()> {
        SubmissionRepository::update_result(
            &self.pool,
            &submission.id,
            &submission.status,
            submission.result_message.as_deref(),
            submission.finished_at,
        )
        .await
    }

    async fn find_problem(&self, id: Uuid) -> AppResult<Option<Problem>> {
        let Some(mut problem) = ProblemRepository::find_by_id(&self.pool, &id).await? else {
            return Ok(None);
        };
        problem.test_cases = ProblemRepository::get_test_cases(&self.pool, &id).await?;
        Ok(Some(problem))
    }
}
