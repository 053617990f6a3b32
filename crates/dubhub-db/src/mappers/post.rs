//! Post entity <-> model mapper

use dubhub_core::entities::{Comment, PendingVerification, Post, User};
use dubhub_core::error::DomainError;
use dubhub_core::value_objects::{VerificationStatus, VerificationStatusParseError};

use crate::models::{PendingVerificationModel, PostModel};

use super::user::parse_role;

/// Convert database status string to VerificationStatus; unknown values are a database error
fn parse_status(status: &str) -> Result<VerificationStatus, DomainError> {
    status
        .parse()
        .map_err(|e: VerificationStatusParseError| DomainError::DatabaseError(e.to_string()))
}

/// Convert PostModel to Post entity
impl TryFrom<PostModel> for Post {
    type Error = DomainError;

    fn try_from(model: PostModel) -> Result<Self, Self::Error> {
        Ok(Post {
            id: model.id,
            owner_id: model.owner_id,
            title: model.title,
            description: model.description,
            genre: model.genre,
            video_url: model.video_url,
            verification_status: parse_status(&model.verification_status)?,
            is_verified_community: model.is_verified_community,
            verified_by_moderator: model.verified_by_moderator,
            verified_comment_id: model.verified_comment_id,
            verified_by: model.verified_by,
            version: model.version,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Convert a joined pending-queue row to the domain view
impl TryFrom<PendingVerificationModel> for PendingVerification {
    type Error = DomainError;

    fn try_from(model: PendingVerificationModel) -> Result<Self, Self::Error> {
        let owner = User {
            id: model.post.owner_id,
            username: model.owner_username,
            role: parse_role(&model.owner_role),
            created_at: model.owner_created_at,
        };

        // LEFT JOIN: every comment column is NULL when the candidate is missing
        let comment = match (
            model.comment_id,
            model.comment_author_id,
            model.comment_body,
            model.comment_created_at,
        ) {
            (Some(id), Some(author_id), Some(body), Some(created_at)) => Some(Comment {
                id,
                post_id: model.post.id,
                author_id,
                body,
                artist_tag: model.comment_artist_tag,
                created_at,
            }),
            _ => None,
        };

        Ok(PendingVerification {
            post: Post::try_from(model.post)?,
            owner,
            comment,
        })
    }
}

/// Verification columns of a partial update, flattened for binding
pub struct VerificationUpdateBinds {
    pub verification_status: Option<&'static str>,
    pub is_verified_community: Option<bool>,
    pub verified_by_moderator: Option<bool>,
    pub set_verified_comment_id: bool,
    pub verified_comment_id: Option<uuid::Uuid>,
    pub set_verified_by: bool,
    pub verified_by: Option<uuid::Uuid>,
}

impl VerificationUpdateBinds {
    pub fn new(update: &dubhub_core::entities::VerificationUpdate) -> Self {
        Self {
            verification_status: update.verification_status.map(VerificationStatus::as_str),
            is_verified_community: update.is_verified_community,
            verified_by_moderator: update.verified_by_moderator,
            set_verified_comment_id: update.verified_comment_id.is_some(),
            verified_comment_id: update.verified_comment_id.flatten(),
            set_verified_by: update.verified_by.is_some(),
            verified_by: update.verified_by.flatten(),
        }
    }
}
