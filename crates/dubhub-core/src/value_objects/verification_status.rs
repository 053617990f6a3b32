//! Verification status - where a post sits in the track identification workflow
//!
//! ```text
//!  unverified --(owner submits)--> community --(moderator confirms)--> identified
//!      ^                               |                                   |
//!      |_______(moderator reopens)_____|___________________________________|
//! ```
//!
//! Moderators may also confirm straight from `unverified`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Verification state of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    /// No identification accepted yet
    #[default]
    Unverified,
    /// Owner accepted a community identification, awaiting moderator review
    Community,
    /// A moderator ratified the identification
    Identified,
}

impl VerificationStatus {
    /// Database / wire representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unverified => "unverified",
            Self::Community => "community",
            Self::Identified => "identified",
        }
    }

    /// Whether the owner may (re)submit a community identification from this state
    #[inline]
    pub const fn accepts_community_submission(self) -> bool {
        !matches!(self, Self::Identified)
    }

    /// Whether the post waits in the moderator review queue
    #[inline]
    pub const fn is_pending_review(self) -> bool {
        matches!(self, Self::Community)
    }

    /// Whether the identification has been ratified
    #[inline]
    pub const fn is_identified(self) -> bool {
        matches!(self, Self::Identified)
    }
}

/// Error when parsing a verification status
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid verification status: {0}")]
pub struct VerificationStatusParseError(pub String);

impl FromStr for VerificationStatus {
    type Err = VerificationStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unverified" => Ok(Self::Unverified),
            "community" => Ok(Self::Community),
            "identified" => Ok(Self::Identified),
            other => Err(VerificationStatusParseError(other.to_string())),
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
