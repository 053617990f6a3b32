//! Post handlers
//!
//! Reading a post and the owner's community submission.

use axum::{extract::State, Json};
use dubhub_service::dto::{CommunityVerificationRequest, PostResponse};
use dubhub_service::VerificationService;

use crate::extractors::{AuthUser, IdPath, PostIdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get a post with its verification state
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(path): IdPath<PostIdPath>,
) -> ApiResult<Json<PostResponse>> {
    let service = VerificationService::new(state.service_context());
    let post = service.get_post(path.post_id).await?;
    Ok(Json(post))
}

/// Owner selects a comment as the likely identification
///
/// POST /posts/{post_id}/verification/community
pub async fn submit_community_verification(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<PostIdPath>,
    ValidatedJson(request): ValidatedJson<CommunityVerificationRequest>,
) -> ApiResult<Json<PostResponse>> {
    let service = VerificationService::new(state.service_context());
    let post = service
        .submit_for_community_verification(&auth.actor, path.post_id, request.comment_id)
        .await?;
    Ok(Json(post))
}
