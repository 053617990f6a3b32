//! Comment entity - a user's claim about which track plays in a post

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Comment entity (identification candidate)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub body: String,
    /// Tagged verified artist, if the author mentioned one
    pub artist_tag: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment
    pub fn new(id: Uuid, post_id: Uuid, author_id: Uuid, body: String) -> Self {
        Self {
            id,
            post_id,
            author_id,
            body,
            artist_tag: None,
            created_at: Utc::now(),
        }
    }

    /// Check if this comment was left on the given post
    #[inline]
    pub fn belongs_to(&self, post_id: Uuid) -> bool {
        self.post_id == post_id
    }
}
