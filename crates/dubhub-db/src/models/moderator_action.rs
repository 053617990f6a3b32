//! Moderator action (audit log) database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for moderator_actions table
#[derive(Debug, Clone, FromRow)]
pub struct ModeratorActionModel {
    pub id: Uuid,
    pub post_id: Uuid,
    pub moderator_id: Uuid,
    pub action: String,
    pub comment_id: Option<Uuid>,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}
