//! Business logic services

pub mod contest_service;
pub mod submission_service;

pub use contest_service::ContestService;
pub use submission_service::SubmissionService;
