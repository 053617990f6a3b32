//! Moderation handlers
//!
//! Review queue, confirm, reopen and the per-post audit history.
//! All of these require the moderator role.

use axum::{extract::State, Json};
use dubhub_service::dto::{
    ConfirmIdentificationRequest, ModerationResponse, ModeratorActionResponse,
    PendingVerificationResponse, ReopenRequest,
};
use dubhub_service::VerificationService;

use crate::extractors::{AuthUser, IdPath, OptionalValidatedJson, PostIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Posts awaiting review, oldest first
///
/// GET /moderation/pending
pub async fn list_pending(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<PendingVerificationResponse>>> {
    let service = VerificationService::new(state.service_context());
    let pending = service.list_pending_verifications(&auth.actor).await?;
    Ok(Json(pending))
}

/// Confirm an identification
///
/// POST /moderation/posts/{post_id}/confirm
pub async fn confirm(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<PostIdPath>,
    OptionalValidatedJson(request): OptionalValidatedJson<ConfirmIdentificationRequest>,
) -> ApiResult<Json<ModerationResponse>> {
    let service = VerificationService::new(state.service_context());
    let response = service
        .moderator_confirm(&auth.actor, path.post_id, request)
        .await?;
    Ok(Json(response))
}

/// Reject the current identification and reopen the post
///
/// POST /moderation/posts/{post_id}/reopen
pub async fn reopen(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<PostIdPath>,
    OptionalValidatedJson(request): OptionalValidatedJson<ReopenRequest>,
) -> ApiResult<Json<ModerationResponse>> {
    let service = VerificationService::new(state.service_context());
    let response = service
        .moderator_reopen(&auth.actor, path.post_id, request)
        .await?;
    Ok(Json(response))
}

/// Moderation history of a post
///
/// GET /moderation/posts/{post_id}/actions
pub async fn history(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<PostIdPath>,
) -> ApiResult<Json<Vec<ModeratorActionResponse>>> {
    let service = VerificationService::new(state.service_context());
    let actions = service.moderation_history(&auth.actor, path.post_id).await?;
    Ok(Json(actions))
}
