//! Notification handlers
//!
//! A user only ever sees and updates their own notifications.

use axum::{extract::State, Json};
use dubhub_service::dto::{MarkAllReadResponse, NotificationResponse, UnreadCountResponse};
use dubhub_service::NotificationService;

use crate::extractors::{AuthUser, IdPath, LimitQuery, NotificationIdPath};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// GET /notifications?limit=
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    query: LimitQuery,
) -> ApiResult<Json<Vec<NotificationResponse>>> {
    let service = NotificationService::new(state.service_context());
    let notifications = service.list(auth.user_id(), query.limit).await?;
    Ok(Json(notifications))
}

/// GET /notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UnreadCountResponse>> {
    let service = NotificationService::new(state.service_context());
    Ok(Json(service.unread_count(auth.user_id()).await?))
}

/// POST /notifications/{notification_id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<NotificationIdPath>,
) -> ApiResult<NoContent> {
    let service = NotificationService::new(state.service_context());
    service.mark_read(auth.user_id(), path.notification_id).await?;
    Ok(NoContent)
}

/// POST /notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<MarkAllReadResponse>> {
    let service = NotificationService::new(state.service_context());
    Ok(Json(service.mark_all_read(auth.user_id()).await?))
}
