//! Submission request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create submission request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubmissionRequest {
    /// Contest the submission belongs to
    pub contest_id: Uuid,

    /// Problem ID to submit for
    pub problem_id: Uuid,

    /// Submitter's username (created on first submission)
    #[validate(length(min = 1, max = 32))]
    pub username: String,

    /// Declared programming language; unrecognized values fall back to the
    /// execution service's default
    #[validate(length(max = 20))]
    pub language: Option<String>,

    /// Source code
    #[validate(length(min = 1, max = 102400))] // 100 KB max
    pub source_code: String,
}
