//! Post database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub video_url: String,
    pub verification_status: String,
    pub is_verified_community: bool,
    pub verified_by_moderator: bool,
    pub verified_comment_id: Option<Uuid>,
    pub verified_by: Option<Uuid>,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Pending queue row: a post joined with its owner and candidate comment
#[derive(Debug, Clone, FromRow)]
pub struct PendingVerificationModel {
    #[sqlx(flatten)]
    pub post: PostModel,
    pub owner_username: String,
    pub owner_role: String,
    pub owner_created_at: DateTime<Utc>,
    pub comment_id: Option<Uuid>,
    pub comment_author_id: Option<Uuid>,
    pub comment_body: Option<String>,
    pub comment_artist_tag: Option<Uuid>,
    pub comment_created_at: Option<DateTime<Utc>>,
}
