//! Submission service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::statuses,
    db::repositories::{ContestRepository, ProblemRepository, SubmissionRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::submissions::{request::CreateSubmissionRequest, response::SubmissionResponse},
    judge::JudgeScheduler,
    models::Submission,
};

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Create a new submission and queue it for judging.
    ///
    /// The submitter is looked up by username and created on first sight.
    /// Returns as soon as the submission is queued; judging happens in the
    /// background and is observed by polling the submission.
    pub async fn create_submission(
        pool: &PgPool,
        scheduler: &JudgeScheduler,
        payload: CreateSubmissionRequest,
    ) -> AppResult<Submission> {
        if !ContestRepository::exists(pool, &payload.contest_id).await? {
            return Err(AppError::NotFound("Contest not found".to_string()));
        }
        if !ProblemRepository::exists(pool, &payload.problem_id).await? {
            return Err(AppError::NotFound("Problem not found".to_string()));
        }

        let user = match UserRepository::find_by_username(pool, &payload.username).await? {
            Some(user) => user,
            None => UserRepository::create(pool, &payload.username).await?,
        };

        let submission = SubmissionRepository::create(
            pool,
            &payload.contest_id,
            &payload.problem_id,
            &user.username,
            payload.language.as_deref(),
            &payload.source_code,
            statuses::PENDING,
        )
        .await?;

        scheduler.enqueue(submission.id)?;

        Ok(submission)
    }

    /// Get submission by ID
    pub async fn get_submission(pool: &PgPool, id: &Uuid) -> AppResult<SubmissionResponse> {
        let submission = SubmissionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

        Ok(SubmissionResponse::from(submission))
    }
}
