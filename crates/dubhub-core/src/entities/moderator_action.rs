//! Moderator action - append-only audit record of moderation decisions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Moderation decision type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationActionKind {
    ConfirmedId,
    Reopened,
}

impl ModerationActionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConfirmedId => "confirmed_id",
            Self::Reopened => "reopened",
        }
    }
}

impl FromStr for ModerationActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed_id" => Ok(Self::ConfirmedId),
            "reopened" => Ok(Self::Reopened),
            other => Err(format!("Invalid moderator action: {other}")),
        }
    }
}

impl fmt::Display for ModerationActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audit row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeratorAction {
    pub id: Uuid,
    pub post_id: Uuid,
    pub moderator_id: Uuid,
    pub action: ModerationActionKind,
    /// Comment confirmed by the action, if any
    pub comment_id: Option<Uuid>,
    /// Free text the moderator gave for the decision
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ModeratorAction {
    pub fn new(
        id: Uuid,
        post_id: Uuid,
        moderator_id: Uuid,
        action: ModerationActionKind,
        comment_id: Option<Uuid>,
    ) -> Self {
        Self {
            id,
            post_id,
            moderator_id,
            action,
            comment_id,
            reason: None,
            created_at: Utc::now(),
        }
    }

    /// Attach the moderator's reason
    pub fn with_reason(mut self, reason: Option<String>) -> Self {
        self.reason = reason;
        self
    }
}
