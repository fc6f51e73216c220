//! Contest handler implementations

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{error::AppResult, services::ContestService, state::AppState};

use super::response::{ContestResponse, LeaderboardEntry};

/// Get a contest with its problems
pub async fn get_contest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ContestResponse>> {
    let contest = ContestService::get_contest(state.db(), &id).await?;

    Ok(Json(contest))
}

/// Get the contest leaderboard: accepted submissions per user
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<LeaderboardEntry>>> {
    let leaderboard = ContestService::leaderboard(state.db(), &id).await?;

    Ok(Json(leaderboard))
}
