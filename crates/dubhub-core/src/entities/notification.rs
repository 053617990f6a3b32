//! Notification entity - a best-effort signal recorded when a post changes verification state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// What triggered the notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// To the comment author: the post owner escalated their identification
    SubmittedForReview,
    /// To every moderator: a post entered the review queue
    ReviewRequested,
    /// To the identifier: a moderator confirmed their identification
    IdConfirmed,
    /// To the previous identifier: a moderator reopened the post
    IdRejected,
}

impl NotificationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SubmittedForReview => "submitted_for_review",
            Self::ReviewRequested => "review_requested",
            Self::IdConfirmed => "id_confirmed",
            Self::IdRejected => "id_rejected",
        }
    }

    /// Human readable message shown in the client
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::SubmittedForReview => "Your track ID was submitted for moderator review",
            Self::ReviewRequested => "A track ID is awaiting moderator review",
            Self::IdConfirmed => "A moderator confirmed your track ID",
            Self::IdRejected => "A moderator rejected the track ID you provided",
        }
    }
}

impl FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submitted_for_review" => Ok(Self::SubmittedForReview),
            "review_requested" => Ok(Self::ReviewRequested),
            "id_confirmed" => Ok(Self::IdConfirmed),
            "id_rejected" => Ok(Self::IdRejected),
            other => Err(format!("Invalid notification kind: {other}")),
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub triggered_by_user_id: Uuid,
    pub post_id: Uuid,
    pub comment_id: Option<Uuid>,
    pub kind: NotificationKind,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create an unread notification with the kind's default message
    pub fn new(
        id: Uuid,
        recipient_id: Uuid,
        triggered_by_user_id: Uuid,
        post_id: Uuid,
        comment_id: Option<Uuid>,
        kind: NotificationKind,
    ) -> Self {
        Self {
            id,
            recipient_id,
            triggered_by_user_id,
            post_id,
            comment_id,
            kind,
            message: kind.default_message().to_string(),
            read: false,
            created_at: Utc::now(),
        }
    }

    /// Append free text (e.g. a moderator's reason) to the message
    pub fn with_detail(mut self, detail: Option<&str>) -> Self {
        if let Some(detail) = detail.map(str::trim).filter(|d| !d.is_empty()) {
            self.message = format!("{}: {detail}", self.kind.default_message());
        }
        self
    }

    /// Check if the user triggered their own notification
    #[inline]
    pub fn is_self_triggered(&self) -> bool {
        self.recipient_id == self.triggered_by_user_id
    }
}
