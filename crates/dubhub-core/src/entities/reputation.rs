//! Reputation (karma) ledger entries and leaderboard rows

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Points granted by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReputationPolicy {
    /// Score granted to the author of a confirmed identification
    pub identification_points: i64,
    /// Score granted to the moderator who confirmed it
    pub moderation_points: i64,
}

impl Default for ReputationPolicy {
    fn default() -> Self {
        Self {
            identification_points: 10,
            moderation_points: 1,
        }
    }
}

/// Accumulated reputation for one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReputationEntry {
    pub user_id: Uuid,
    pub score: i64,
    pub correct_ids: i64,
    pub updated_at: DateTime<Utc>,
}

impl ReputationEntry {
    /// Zeroed entry for a user that has never been credited
    pub fn empty(user_id: Uuid) -> Self {
        Self {
            user_id,
            score: 0,
            correct_ids: 0,
            updated_at: Utc::now(),
        }
    }

    /// Add to the accumulators
    pub fn credit(&mut self, score: i64, correct_ids: i64) {
        self.score += score;
        self.correct_ids += correct_ids;
        self.updated_at = Utc::now();
    }
}

/// One row of the karma leaderboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: i64,
    pub user_id: Uuid,
    pub username: String,
    pub score: i64,
    pub correct_ids: i64,
}
