//! Reputation entity <-> model mapper

use dubhub_core::entities::{LeaderboardEntry, ReputationEntry};

use crate::models::{LeaderboardRowModel, ReputationModel};

impl From<ReputationModel> for ReputationEntry {
    fn from(model: ReputationModel) -> Self {
        ReputationEntry {
            user_id: model.user_id,
            score: model.score,
            correct_ids: model.correct_ids,
            updated_at: model.updated_at,
        }
    }
}

impl From<LeaderboardRowModel> for LeaderboardEntry {
    fn from(model: LeaderboardRowModel) -> Self {
        LeaderboardEntry {
            rank: model.rank,
            user_id: model.user_id,
            username: model.username,
            score: model.score,
            correct_ids: model.correct_ids,
        }
    }
}
