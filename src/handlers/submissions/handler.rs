//! Submission handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    services::SubmissionService,
    state::AppState,
};

use super::{
    request::CreateSubmissionRequest,
    response::{CreateSubmissionResponse, SubmissionResponse},
};

/// Create a new submission and queue it for judging
pub async fn create_submission(
    State(state): State<AppState>,
    Json(payload): Json<CreateSubmissionRequest>,
) -> AppResult<(StatusCode, Json<CreateSubmissionResponse>)> {
    payload.validate()?;

    if payload.username.trim().is_empty() {
        return Err(AppError::Validation("username is required".to_string()));
    }
    if payload.source_code.trim().is_empty() {
        return Err(AppError::Validation("code is required".to_string()));
    }

    let submission =
        SubmissionService::create_submission(state.db(), state.scheduler(), payload).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(CreateSubmissionResponse {
            id: submission.id,
            message: "Submission received and queued for judging".to_string(),
            status: submission.status,
        }),
    ))
}

/// Get a specific submission (status polling)
pub async fn get_submission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SubmissionResponse>> {
    let submission = SubmissionService::get_submission(state.db(), &id).await?;

    Ok(Json(submission))
}
