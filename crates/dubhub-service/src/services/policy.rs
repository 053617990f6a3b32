//! Authorization and state policy checks
//!
//! Each transition composes the checks it needs before touching the post.
//! All checks are pure so they can run again after a version conflict re-read.

use uuid::Uuid;

use dubhub_core::entities::{Comment, Post, User};
use dubhub_core::error::DomainError;
use dubhub_core::value_objects::UserRole;

/// The authenticated caller, as resolved from the bearer token and users table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl Actor {
    pub fn new(user_id: Uuid, role: UserRole) -> Self {
        Self { user_id, role }
    }

    #[inline]
    pub fn is_moderator(&self) -> bool {
        self.role.is_moderator()
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.role)
    }
}

/// Only the post owner may escalate an identification
pub fn require_owner(actor: &Actor, post: &Post) -> Result<(), DomainError> {
    if post.is_owned_by(actor.user_id) {
        Ok(())
    } else {
        Err(DomainError::NotPostOwner)
    }
}

/// Moderation transitions require the moderator role
pub fn require_moderator(actor: &Actor) -> Result<(), DomainError> {
    if actor.is_moderator() {
        Ok(())
    } else {
        Err(DomainError::NotModerator)
    }
}

/// Community submission is closed once a moderator identified the track
pub fn require_open_for_community(post: &Post) -> Result<(), DomainError> {
    if post.verification_status.accepts_community_submission() {
        Ok(())
    } else {
        Err(DomainError::AlreadyIdentified)
    }
}

/// The comment a confirm applies to: the explicit override, else the owner's pick
pub fn resolve_confirm_comment(post: &Post, requested: Option<Uuid>) -> Result<Uuid, DomainError> {
    requested
        .or(post.verified_comment_id)
        .ok_or(DomainError::NoCommentToConfirm)
}

/// A comment on a different post is treated as missing
pub fn require_comment_on_post(
    comment: Option<Comment>,
    comment_id: Uuid,
    post: &Post,
) -> Result<Comment, DomainError> {
    comment
        .filter(|c| c.belongs_to(post.id))
        .ok_or(DomainError::CommentNotFound(comment_id))
}
