//! Submission response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Submission;

/// Submission response for status polling
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub contest_id: Uuid,
    pub problem_id: Uuid,
    pub username: String,
    pub language: Option<String>,
    pub status: String,
    pub result_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl From<Submission> for SubmissionResponse {
    fn from(submission: Submission) -> Self {
        Self {
            id: submission.id,
            contest_id: submission.contest_id,
            problem_id: submission.problem_id,
            username: submission.username,
            language: submission.language,
            status: submission.status,
            result_message: submission.result_message,
            created_at: submission.created_at,
            finished_at: submission.finished_at,
        }
    }
}

/// Create submission response
#[derive(Debug, Serialize)]
pub struct CreateSubmissionResponse {
    pub id: Uuid,
    pub message: String,
    pub status: String,
}
