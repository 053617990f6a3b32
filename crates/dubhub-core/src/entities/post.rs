//! Post entity - a submitted clip awaiting or having received a track identification

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{Comment, User};
use crate::value_objects::VerificationStatus;

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub video_url: String,
    pub verification_status: VerificationStatus,
    pub is_verified_community: bool,
    pub verified_by_moderator: bool,
    pub verified_comment_id: Option<Uuid>,
    pub verified_by: Option<Uuid>,
    /// Bumped on every verification write, used for conditional updates
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new, unverified Post
    pub fn new(id: Uuid, owner_id: Uuid, title: String, video_url: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            owner_id,
            title,
            description: None,
            genre: None,
            video_url,
            verification_status: VerificationStatus::Unverified,
            is_verified_community: false,
            verified_by_moderator: false,
            verified_comment_id: None,
            verified_by: None,
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the given user submitted this post
    #[inline]
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }

    /// Check the verification invariant:
    /// moderator-verified implies identified implies an accepted comment and its author.
    pub fn verification_is_consistent(&self) -> bool {
        if self.verified_by_moderator && !self.verification_status.is_identified() {
            return false;
        }
        if self.verification_status.is_identified()
            && (self.verified_comment_id.is_none() || self.verified_by.is_none())
        {
            return false;
        }
        true
    }

    /// Apply a partial verification update in place, bumping the version
    pub fn apply_verification(&mut self, update: &VerificationUpdate) {
        if let Some(status) = update.verification_status {
            self.verification_status = status;
        }
        if let Some(flag) = update.is_verified_community {
            self.is_verified_community = flag;
        }
        if let Some(flag) = update.verified_by_moderator {
            self.verified_by_moderator = flag;
        }
        if let Some(comment_id) = update.verified_comment_id {
            self.verified_comment_id = comment_id;
        }
        if let Some(verified_by) = update.verified_by {
            self.verified_by = verified_by;
        }
        self.version += 1;
        self.updated_at = Utc::now();
    }
}

/// Partial update of a post's verification columns.
///
/// `None` leaves a column untouched. For the nullable columns the inner
/// `Option` is the value written, so `Some(None)` clears the column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationUpdate {
    pub verification_status: Option<VerificationStatus>,
    pub is_verified_community: Option<bool>,
    pub verified_by_moderator: Option<bool>,
    pub verified_comment_id: Option<Option<Uuid>>,
    pub verified_by: Option<Option<Uuid>>,
}

impl VerificationUpdate {
    /// Owner accepted `comment` as the likely identification
    pub fn community(comment: &Comment) -> Self {
        Self {
            verification_status: Some(VerificationStatus::Community),
            is_verified_community: Some(true),
            verified_by_moderator: None,
            verified_comment_id: Some(Some(comment.id)),
            verified_by: Some(Some(comment.author_id)),
        }
    }

    /// Moderator ratified `comment`
    pub fn confirmed(comment: &Comment) -> Self {
        Self {
            verification_status: Some(VerificationStatus::Identified),
            is_verified_community: None,
            verified_by_moderator: Some(true),
            verified_comment_id: Some(Some(comment.id)),
            verified_by: Some(Some(comment.author_id)),
        }
    }

    /// Moderator reset the post back to unverified
    pub fn reopened() -> Self {
        Self {
            verification_status: Some(VerificationStatus::Unverified),
            is_verified_community: Some(false),
            verified_by_moderator: Some(false),
            verified_comment_id: Some(None),
            verified_by: Some(None),
        }
    }

    /// Check if the update writes nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A post waiting in the moderator review queue, with its owner and candidate comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingVerification {
    pub post: Post,
    pub owner: User,
    pub comment: Option<Comment>,
}
