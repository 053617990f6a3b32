//! Notification and moderator action entity <-> model mappers
//!
//! `kind` and `action` are free text columns, so an unknown value is
//! reported as a database error instead of being guessed.

use dubhub_core::entities::{ModeratorAction, Notification};
use dubhub_core::error::DomainError;

use crate::models::{ModeratorActionModel, NotificationModel};

impl TryFrom<NotificationModel> for Notification {
    type Error = DomainError;

    fn try_from(model: NotificationModel) -> Result<Self, Self::Error> {
        Ok(Notification {
            id: model.id,
            recipient_id: model.recipient_id,
            triggered_by_user_id: model.triggered_by_user_id,
            post_id: model.post_id,
            comment_id: model.comment_id,
            kind: model.kind.parse().map_err(DomainError::DatabaseError)?,
            message: model.message,
            read: model.read,
            created_at: model.created_at,
        })
    }
}

impl TryFrom<ModeratorActionModel> for ModeratorAction {
    type Error = DomainError;

    fn try_from(model: ModeratorActionModel) -> Result<Self, Self::Error> {
        Ok(ModeratorAction {
            id: model.id,
            post_id: model.post_id,
            moderator_id: model.moderator_id,
            action: model.action.parse().map_err(DomainError::DatabaseError)?,
            comment_id: model.comment_id,
            reason: model.reason,
            created_at: model.created_at,
        })
    }
}
