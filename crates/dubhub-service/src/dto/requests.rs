//! Request DTOs for API endpoints
//!
//! Every body implements `Validate`; only free text carries rules.

use serde::Deserialize;
use std::borrow::Cow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Longest reason a moderator can attach to a decision
pub const MAX_REASON_LENGTH: usize = 500;

/// Reason length rule; surrounding whitespace does not count
pub fn reason_within_limit(reason: &str) -> bool {
    reason.trim().chars().count() <= MAX_REASON_LENGTH
}

fn validate_reason(reason: &str) -> Result<(), ValidationError> {
    if reason_within_limit(reason) {
        Ok(())
    } else {
        Err(ValidationError::new("length").with_message(Cow::Owned(format!(
            "Reason must be at most {MAX_REASON_LENGTH} characters"
        ))))
    }
}

// ============================================================================
// Verification Requests
// ============================================================================

/// Owner accepts a comment as the likely identification
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommunityVerificationRequest {
    pub comment_id: Uuid,
}

// ============================================================================
// Moderation Requests
// ============================================================================

/// Moderator confirm; without `comment_id` the owner's pick is confirmed
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ConfirmIdentificationRequest {
    pub comment_id: Option<Uuid>,
}

/// Moderator reopen
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ReopenRequest {
    #[validate(custom(function = "validate_reason"))]
    pub reason: Option<String>,
}
