//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use dubhub_core::entities::{
    Comment, LeaderboardEntry, ModeratorAction, Notification, PendingVerification, Post,
    ReputationEntry, User,
};

use super::responses::{
    CommentResponse, LeaderboardEntryResponse, ModeratorActionResponse, NotificationResponse,
    PendingVerificationResponse, PostResponse, ReputationResponse, UserSummaryResponse,
};

// ============================================================================
// Post Mappers
// ============================================================================

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            owner_id: post.owner_id,
            title: post.title.clone(),
            description: post.description.clone(),
            genre: post.genre.clone(),
            video_url: post.video_url.clone(),
            verification_status: post.verification_status,
            is_verified_community: post.is_verified_community,
            verified_by_moderator: post.verified_by_moderator,
            verified_comment_id: post.verified_comment_id,
            verified_by: post.verified_by,
            version: post.version,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self::from(&post)
    }
}

impl From<&User> for UserSummaryResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            author_id: comment.author_id,
            body: comment.body,
            artist_tag: comment.artist_tag,
            created_at: comment.created_at,
        }
    }
}

impl From<PendingVerification> for PendingVerificationResponse {
    fn from(pending: PendingVerification) -> Self {
        Self {
            post: PostResponse::from(&pending.post),
            owner: UserSummaryResponse::from(&pending.owner),
            comment: pending.comment.map(CommentResponse::from),
        }
    }
}

// ============================================================================
// Moderation Mappers
// ============================================================================

impl From<ModeratorAction> for ModeratorActionResponse {
    fn from(action: ModeratorAction) -> Self {
        Self {
            id: action.id,
            post_id: action.post_id,
            moderator_id: action.moderator_id,
            action: action.action,
            comment_id: action.comment_id,
            reason: action.reason,
            created_at: action.created_at,
        }
    }
}

// ============================================================================
// Reputation Mappers
// ============================================================================

impl From<ReputationEntry> for ReputationResponse {
    fn from(entry: ReputationEntry) -> Self {
        Self {
            user_id: entry.user_id,
            score: entry.score,
            correct_ids: entry.correct_ids,
        }
    }
}

impl From<LeaderboardEntry> for LeaderboardEntryResponse {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            rank: entry.rank,
            user_id: entry.user_id,
            username: entry.username,
            score: entry.score,
            correct_ids: entry.correct_ids,
        }
    }
}

// ============================================================================
// Notification Mappers
// ============================================================================

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            triggered_by_user_id: notification.triggered_by_user_id,
            post_id: notification.post_id,
            comment_id: notification.comment_id,
            kind: notification.kind,
            message: notification.message,
            read: notification.read,
            created_at: notification.created_at,
        }
    }
}
