//! Reputation (karma) service
//!
//! Credits are single upserts in the store, so concurrent credits to the same
//! user both land. Nothing here ever decrements.

use dubhub_core::entities::ReputationEntry;
use dubhub_core::error::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{LeaderboardEntryResponse, LeaderboardResponse, ReputationResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Leaderboard size when the caller does not ask for one
pub const DEFAULT_LEADERBOARD_LIMIT: i64 = 25;
/// Largest leaderboard page
pub const MAX_LEADERBOARD_LIMIT: i64 = 100;

/// Clamp a requested leaderboard size into `1..=MAX_LEADERBOARD_LIMIT`
pub fn leaderboard_limit(requested: Option<i64>) -> i64 {
    requested
        .unwrap_or(DEFAULT_LEADERBOARD_LIMIT)
        .clamp(1, MAX_LEADERBOARD_LIMIT)
}

/// Reputation service
pub struct ReputationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReputationService<'a> {
    /// Create a new ReputationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Credit the author of a confirmed identification
    #[instrument(skip(self))]
    pub async fn credit_identification(&self, user_id: Uuid) -> ServiceResult<ReputationEntry> {
        let points = self.ctx.reputation_policy().identification_points;
        let entry = self.ctx.reputation_repo().credit(user_id, points, 1).await?;

        info!(user_id = %user_id, score = entry.score, correct_ids = entry.correct_ids, "Identification credited");
        Ok(entry)
    }

    /// Credit the moderator who confirmed an identification
    #[instrument(skip(self))]
    pub async fn credit_moderation(&self, user_id: Uuid) -> ServiceResult<ReputationEntry> {
        let points = self.ctx.reputation_policy().moderation_points;
        let entry = self.ctx.reputation_repo().credit(user_id, points, 0).await?;

        info!(user_id = %user_id, score = entry.score, "Moderation credited");
        Ok(entry)
    }

    /// A user's reputation; zero if they were never credited
    #[instrument(skip(self))]
    pub async fn get_reputation(&self, user_id: Uuid) -> ServiceResult<ReputationResponse> {
        if self.ctx.user_repo().find_by_id(user_id).await?.is_none() {
            return Err(DomainError::UserNotFound(user_id).into());
        }

        let entry = self
            .ctx
            .reputation_repo()
            .find(user_id)
            .await?
            .unwrap_or_else(|| ReputationEntry::empty(user_id));

        Ok(ReputationResponse::from(entry))
    }

    /// Top users by score, then correct identifications, then username
    #[instrument(skip(self))]
    pub async fn leaderboard(&self, limit: Option<i64>) -> ServiceResult<LeaderboardResponse> {
        let limit = leaderboard_limit(limit);
        let entries = self.ctx.reputation_repo().leaderboard(limit).await?;

        Ok(LeaderboardResponse {
            entries: entries.into_iter().map(LeaderboardEntryResponse::from).collect(),
            limit,
        })
    }
}
