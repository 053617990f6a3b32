//! Reputation database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for reputation table
#[derive(Debug, Clone, FromRow)]
pub struct ReputationModel {
    pub user_id: Uuid,
    pub score: i64,
    pub correct_ids: i64,
    pub updated_at: DateTime<Utc>,
}

/// Leaderboard row (reputation joined with users, ranked)
#[derive(Debug, Clone, FromRow)]
pub struct LeaderboardRowModel {
    pub rank: i64,
    pub user_id: Uuid,
    pub username: String,
    pub score: i64,
    pub correct_ids: i64,
}
