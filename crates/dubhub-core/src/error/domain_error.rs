//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Post not found: {0}")]
    PostNotFound(Uuid),

    #[error("Comment not found: {0}")]
    CommentNotFound(Uuid),

    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Notification not found: {0}")]
    NotificationNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("No identification selected: supply a comment_id or submit one for community verification first")]
    NoCommentToConfirm,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Only the post owner can submit an identification for verification")]
    NotPostOwner,

    #[error("Moderator role required")]
    NotModerator,

    // =========================================================================
    // State Errors
    // =========================================================================
    #[error("Post already has a moderator-confirmed identification")]
    AlreadyIdentified,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Post {0} was modified concurrently, retry the request")]
    ConcurrentModification(Uuid),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::NotificationNotFound(_) => "UNKNOWN_NOTIFICATION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::NoCommentToConfirm => "NO_COMMENT_TO_CONFIRM",

            // Authorization
            Self::NotPostOwner => "NOT_POST_OWNER",
            Self::NotModerator => "NOT_MODERATOR",

            // State
            Self::AlreadyIdentified => "ALREADY_IDENTIFIED",

            // Conflict
            Self::ConcurrentModification(_) => "CONCURRENT_MODIFICATION",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PostNotFound(_)
                | Self::CommentNotFound(_)
                | Self::UserNotFound(_)
                | Self::NotificationNotFound(_)
        )
    }

    /// Check if this is a validation (bad request) error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::NoCommentToConfirm)
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotPostOwner | Self::NotModerator)
    }

    /// Check if the transition is illegal from the post's current state
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::AlreadyIdentified)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ConcurrentModification(_))
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_authorization() {
            403
        } else if self.is_validation() {
            400
        } else if self.is_invalid_state() || self.is_conflict() {
            409
        } else {
            500
        }
    }
}
