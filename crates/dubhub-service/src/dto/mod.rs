//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    reason_within_limit, CommunityVerificationRequest, ConfirmIdentificationRequest, ReopenRequest,
    MAX_REASON_LENGTH,
};

pub use responses::{
    CommentResponse, HealthChecks, HealthResponse, LeaderboardEntryResponse, LeaderboardResponse,
    MarkAllReadResponse, ModerationResponse, ModeratorActionResponse, NotificationResponse,
    PendingVerificationResponse, PostResponse, ReadinessResponse, ReputationResponse,
    UnreadCountResponse, UserSummaryResponse,
};
