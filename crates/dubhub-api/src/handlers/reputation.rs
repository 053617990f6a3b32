//! Reputation handlers

use axum::{extract::State, Json};
use dubhub_service::dto::{LeaderboardResponse, ReputationResponse};
use dubhub_service::ReputationService;

use crate::extractors::{AuthUser, IdPath, LimitQuery, UserIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// A user's score and correct identification count
///
/// GET /users/{user_id}/reputation
pub async fn get_reputation(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(path): IdPath<UserIdPath>,
) -> ApiResult<Json<ReputationResponse>> {
    let service = ReputationService::new(state.service_context());
    let reputation = service.get_reputation(path.user_id).await?;
    Ok(Json(reputation))
}

/// Top identifiers
///
/// GET /leaderboard?limit=
pub async fn leaderboard(
    State(state): State<AppState>,
    query: LimitQuery,
) -> ApiResult<Json<LeaderboardResponse>> {
    let service = ReputationService::new(state.service_context());
    let board = service.leaderboard(query.limit).await?;
    Ok(Json(board))
}
