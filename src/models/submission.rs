//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Submission database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub contest_id: Uuid,
    pub problem_id: Uuid,
    pub username: String,
    pub language: Option<String>,
    #[serde(skip_serializing)]
    pub source_code: String,
    pub status: String,
    pub result_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

/// Submission status enum
///
/// Transitions are monotonic: `Pending -> Running -> {terminal}`. The four
/// terminal states never revert, and `finished_at` is set exactly when a
/// terminal state is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Pending,
    Running,
    Accepted,
    WrongAnswer,
    CompilationError,
    TimedOut,
    Error,
}

impl SubmissionStatus {
    /// Get status as the stored string value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Accepted => "accepted",
            Self::WrongAnswer => "wrong_answer",
            Self::CompilationError => "compilation_error",
            Self::TimedOut => "timed_out",
            Self::Error => "error",
        }
    }

    /// Parse status from its stored string value
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "running" => Some(Self::Running),
            "accepted" => Some(Self::Accepted),
            "wrong_answer" => Some(Self::WrongAnswer),
            "compilation_error" => Some(Self::CompilationError),
            "timed_out" => Some(Self::TimedOut),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Check if this is a terminal status (judging complete)
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending | Self::Running)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
