//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// JUDGING DEFAULTS
// =============================================================================

/// Default base URL of the remote execution service
pub const DEFAULT_EXECUTION_BASE_URL: &str = "https://ce.judge0.com";

/// Hard wall-clock deadline for one execution-service call, in seconds
pub const DEFAULT_EXECUTION_DEADLINE_SECONDS: u64 = 15;

/// Number of concurrent judge workers
pub const DEFAULT_JUDGE_WORKERS: usize = 4;

/// Sentinel returned when a run produced no stdout at all
pub const NO_OUTPUT: &str = "No output";

// =============================================================================
// EXECUTION SERVICE LANGUAGES
// =============================================================================

/// Language identifiers understood by the execution service.
///
/// The identifier values are the execution service's own numeric language IDs.
/// An unrecognized or absent submission language maps to [`languages::DEFAULT_ID`].
pub mod languages {
    pub const JAVA: u32 = 62;
    pub const PYTHON: u32 = 71;
    pub const CPP: u32 = 54;
    pub const C: u32 = 50;

    /// Fallback identifier for unmapped languages
    pub const DEFAULT_ID: u32 = JAVA;
}

// =============================================================================
// SUBMISSION STATUSES
// =============================================================================

/// Submission status values as stored in the database
pub mod statuses {
    pub const PENDING: &str = "pending";
    pub const RUNNING: &str = "running";
    pub const ACCEPTED: &str = "accepted";
    pub const WRONG_ANSWER: &str = "wrong_answer";
    pub const COMPILATION_ERROR: &str = "compilation_error";
    pub const TIMED_OUT: &str = "timed_out";
    pub const ERROR: &str = "error";
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 1;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

/// Maximum source code size in bytes (100 KB)
pub const MAX_SOURCE_CODE_SIZE: usize = 100 * 1024;

/// Maximum result message length persisted on a submission
pub const MAX_RESULT_MESSAGE_LENGTH: usize = 2000;

/// Maximum HTTP request body size in bytes
pub const MAX_REQUEST_BODY_SIZE: usize = 2 * 1024 * 1024;

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
