//! Notification service
//!
//! Emitting is best-effort: a failed write is logged and swallowed so it can
//! never fail or roll back the transition that triggered it.

use dubhub_core::entities::{Notification, NotificationKind};
use dubhub_core::error::DomainError;
use dubhub_core::value_objects::UserRole;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::dto::{MarkAllReadResponse, NotificationResponse, UnreadCountResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Default page size for the notification list
pub const DEFAULT_NOTIFICATION_LIMIT: i64 = 50;
/// Largest page size for the notification list
pub const MAX_NOTIFICATION_LIMIT: i64 = 100;

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a notification; returns whether it was stored
    #[instrument(skip(self, notification), fields(recipient_id = %notification.recipient_id, kind = %notification.kind))]
    pub async fn emit(&self, notification: Notification) -> bool {
        if notification.is_self_triggered() {
            debug!("Skipping self-triggered notification");
            return false;
        }

        match self.ctx.notification_repo().create(&notification).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, post_id = %notification.post_id, "Failed to record notification");
                false
            }
        }
    }

    /// Tell every moderator a post entered the review queue; returns how many were stored
    #[instrument(skip(self))]
    pub async fn notify_moderators(
        &self,
        triggered_by: Uuid,
        post_id: Uuid,
        comment_id: Option<Uuid>,
    ) -> usize {
        let moderators = match self.ctx.user_repo().find_ids_by_role(UserRole::Moderator).await {
            Ok(ids) => ids,
            Err(e) => {
                warn!(error = %e, "Failed to load moderators for review notification");
                return 0;
            }
        };

        let mut delivered = 0;
        for moderator_id in moderators {
            let notification = Notification::new(
                self.ctx.generate_id(),
                moderator_id,
                triggered_by,
                post_id,
                comment_id,
                NotificationKind::ReviewRequested,
            );
            if self.emit(notification).await {
                delivered += 1;
            }
        }

        debug!(delivered, "Moderators notified");
        delivered
    }

    /// Newest notifications for the user
    #[instrument(skip(self))]
    pub async fn list(&self, user_id: Uuid, limit: Option<i64>) -> ServiceResult<Vec<NotificationResponse>> {
        let limit = limit
            .unwrap_or(DEFAULT_NOTIFICATION_LIMIT)
            .clamp(1, MAX_NOTIFICATION_LIMIT);

        let notifications = self
            .ctx
            .notification_repo()
            .find_by_recipient(user_id, limit)
            .await?;

        Ok(notifications.into_iter().map(NotificationResponse::from).collect())
    }

    /// Unread badge count
    #[instrument(skip(self))]
    pub async fn unread_count(&self, user_id: Uuid) -> ServiceResult<UnreadCountResponse> {
        let unread = self.ctx.notification_repo().unread_count(user_id).await?;
        Ok(UnreadCountResponse { unread })
    }

    /// Mark one of the user's notifications read
    #[instrument(skip(self))]
    pub async fn mark_read(&self, user_id: Uuid, notification_id: Uuid) -> ServiceResult<()> {
        // Someone else's notification looks the same as a missing one
        if self
            .ctx
            .notification_repo()
            .mark_read(notification_id, user_id)
            .await?
        {
            Ok(())
        } else {
            Err(DomainError::NotificationNotFound(notification_id).into())
        }
    }

    /// Mark all of the user's notifications read
    #[instrument(skip(self))]
    pub async fn mark_all_read(&self, user_id: Uuid) -> ServiceResult<MarkAllReadResponse> {
        let updated = self.ctx.notification_repo().mark_all_read(user_id).await?;
        Ok(MarkAllReadResponse { updated })
    }
}
