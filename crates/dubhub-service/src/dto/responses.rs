//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use dubhub_core::entities::{ModerationActionKind, NotificationKind};
use dubhub_core::value_objects::{UserRole, VerificationStatus};

// ============================================================================
// Post Responses
// ============================================================================

/// Post with its verification state
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    pub video_url: String,
    pub verification_status: VerificationStatus,
    pub is_verified_community: bool,
    pub verified_by_moderator: bool,
    pub verified_comment_id: Option<Uuid>,
    pub verified_by: Option<Uuid>,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Minimal public user info
#[derive(Debug, Clone, Serialize)]
pub struct UserSummaryResponse {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
}

/// Identification comment
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_tag: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Entry in the moderator review queue
#[derive(Debug, Clone, Serialize)]
pub struct PendingVerificationResponse {
    pub post: PostResponse,
    pub owner: UserSummaryResponse,
    pub comment: Option<CommentResponse>,
}

// ============================================================================
// Moderation Responses
// ============================================================================

/// Result of a moderator confirm or reopen
#[derive(Debug, Clone, Serialize)]
pub struct ModerationResponse {
    pub success: bool,
    pub post: PostResponse,
}

/// Audit log row
#[derive(Debug, Clone, Serialize)]
pub struct ModeratorActionResponse {
    pub id: Uuid,
    pub post_id: Uuid,
    pub moderator_id: Uuid,
    pub action: ModerationActionKind,
    pub comment_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Reputation Responses
// ============================================================================

/// A user's karma
#[derive(Debug, Clone, Serialize)]
pub struct ReputationResponse {
    pub user_id: Uuid,
    pub score: i64,
    pub correct_ids: i64,
}

/// Ranked leaderboard row
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntryResponse {
    pub rank: i64,
    pub user_id: Uuid,
    pub username: String,
    pub score: i64,
    pub correct_ids: i64,
}

/// Leaderboard page
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntryResponse>,
    pub limit: i64,
}

// ============================================================================
// Notification Responses
// ============================================================================

/// Notification as shown to its recipient
#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: Uuid,
    pub triggered_by_user_id: Uuid,
    pub post_id: Uuid,
    pub comment_id: Option<Uuid>,
    pub kind: NotificationKind,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Unread badge count
#[derive(Debug, Clone, Serialize)]
pub struct UnreadCountResponse {
    pub unread: i64,
}

/// Result of marking everything read
#[derive(Debug, Clone, Serialize)]
pub struct MarkAllReadResponse {
    pub updated: u64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
