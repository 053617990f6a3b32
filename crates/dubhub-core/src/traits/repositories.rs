//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    Comment, LeaderboardEntry, ModeratorAction, Notification, PendingVerification, Post,
    ReputationEntry, User, VerificationUpdate,
};
use crate::error::DomainError;
use crate::value_objects::UserRole;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// IDs of every user holding the role
    async fn find_ids_by_role(&self, role: UserRole) -> RepoResult<Vec<Uuid>>;

    /// Create a new user profile
    async fn create(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>>;

    /// Create a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Write the given verification columns if the row is still at `expected_version`.
    ///
    /// Returns the updated post, or `None` when the version no longer matches
    /// (or the post is gone).
    async fn update_verification(
        &self,
        id: Uuid,
        update: &VerificationUpdate,
        expected_version: i32,
    ) -> RepoResult<Option<Post>>;

    /// Posts in `community` status with owner and candidate comment, oldest first
    async fn find_pending_verifications(&self) -> RepoResult<Vec<PendingVerification>>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;
}

// ============================================================================
// Reputation Repository
// ============================================================================

#[async_trait]
pub trait ReputationRepository: Send + Sync {
    /// Find the ledger entry for a user
    async fn find(&self, user_id: Uuid) -> RepoResult<Option<ReputationEntry>>;

    /// Add to a user's accumulators, creating the entry with these values if absent
    async fn credit(&self, user_id: Uuid, score: i64, correct_ids: i64) -> RepoResult<ReputationEntry>;

    /// Top users by score
    async fn leaderboard(&self, limit: i64) -> RepoResult<Vec<LeaderboardEntry>>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Store a notification
    async fn create(&self, notification: &Notification) -> RepoResult<()>;

    /// Newest notifications for a recipient
    async fn find_by_recipient(&self, recipient_id: Uuid, limit: i64) -> RepoResult<Vec<Notification>>;

    /// Count unread notifications for a recipient
    async fn unread_count(&self, recipient_id: Uuid) -> RepoResult<i64>;

    /// Mark one notification read; returns false if it does not belong to the recipient
    async fn mark_read(&self, id: Uuid, recipient_id: Uuid) -> RepoResult<bool>;

    /// Mark every notification of the recipient read, returning how many changed
    async fn mark_all_read(&self, recipient_id: Uuid) -> RepoResult<u64>;
}

// ============================================================================
// Moderator Action Repository
// ============================================================================

#[async_trait]
pub trait ModeratorActionRepository: Send + Sync {
    /// Append an audit row
    async fn create(&self, action: &ModeratorAction) -> RepoResult<()>;

    /// Audit history for a post, oldest first
    async fn find_by_post(&self, post_id: Uuid) -> RepoResult<Vec<ModeratorAction>>;
}
