//! Test fixtures and response shapes
//!
//! Deserializable mirrors of the API's JSON bodies.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Body for the owner's community submission
#[derive(Debug, Serialize)]
pub struct CommunityVerificationBody {
    pub comment_id: Uuid,
}

/// Body for a moderator confirm
#[derive(Debug, Default, Serialize)]
pub struct ConfirmBody {
    pub comment_id: Option<Uuid>,
}

/// Body for a moderator reopen
#[derive(Debug, Default, Serialize)]
pub struct ReopenBody {
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PostBody {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub verification_status: String,
    pub is_verified_community: bool,
    pub verified_by_moderator: bool,
    pub verified_comment_id: Option<Uuid>,
    pub verified_by: Option<Uuid>,
    pub version: i32,
}

#[derive(Debug, Deserialize)]
pub struct ModerationBody {
    pub success: bool,
    pub post: PostBody,
}

#[derive(Debug, Deserialize)]
pub struct UserSummaryBody {
    pub id: Uuid,
    pub username: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentBody {
    pub id: Uuid,
    pub author_id: Uuid,
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct PendingBody {
    pub post: PostBody,
    pub owner: UserSummaryBody,
    pub comment: Option<CommentBody>,
}

#[derive(Debug, Deserialize)]
pub struct ActionBody {
    pub moderator_id: Uuid,
    pub action: String,
    pub comment_id: Option<Uuid>,
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReputationBody {
    pub user_id: Uuid,
    pub score: i64,
    pub correct_ids: i64,
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardEntryBody {
    pub rank: i64,
    pub user_id: Uuid,
    pub score: i64,
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardBody {
    pub entries: Vec<LeaderboardEntryBody>,
    pub limit: i64,
}

#[derive(Debug, Deserialize)]
pub struct NotificationBody {
    pub id: Uuid,
    pub post_id: Uuid,
    pub kind: String,
    pub message: String,
    pub read: bool,
}

#[derive(Debug, Deserialize)]
pub struct UnreadCountBody {
    pub unread: i64,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
