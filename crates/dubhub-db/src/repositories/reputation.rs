//! PostgreSQL implementation of ReputationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use dubhub_core::entities::{LeaderboardEntry, ReputationEntry};
use dubhub_core::traits::{RepoResult, ReputationRepository};

use crate::models::{LeaderboardRowModel, ReputationModel};

use super::error::{map_db_error, map_foreign_key_violation, user_not_found};

/// PostgreSQL implementation of ReputationRepository
#[derive(Clone)]
pub struct PgReputationRepository {
    pool: PgPool,
}

impl PgReputationRepository {
    /// Create a new PgReputationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReputationRepository for PgReputationRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: Uuid) -> RepoResult<Option<ReputationEntry>> {
        let result = sqlx::query_as::<_, ReputationModel>(
            r"
            SELECT user_id, score, correct_ids, updated_at
            FROM reputation
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ReputationEntry::from))
    }

    #[instrument(skip(self))]
    async fn credit(&self, user_id: Uuid, score: i64, correct_ids: i64) -> RepoResult<ReputationEntry> {
        // Single statement upsert: concurrent credits to one user both land
        let model = sqlx::query_as::<_, ReputationModel>(
            r"
            INSERT INTO reputation (user_id, score, correct_ids, updated_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (user_id) DO UPDATE
            SET score       = reputation.score + EXCLUDED.score,
                correct_ids = reputation.correct_ids + EXCLUDED.correct_ids,
                updated_at  = NOW()
            RETURNING user_id, score, correct_ids, updated_at
            ",
        )
        .bind(user_id)
        .bind(score)
        .bind(correct_ids)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || user_not_found(user_id)))?;

        Ok(ReputationEntry::from(model))
    }

    #[instrument(skip(self))]
    async fn leaderboard(&self, limit: i64) -> RepoResult<Vec<LeaderboardEntry>> {
        let rows = sqlx::query_as::<_, LeaderboardRowModel>(
            r"
            SELECT ROW_NUMBER() OVER (
                       ORDER BY r.score DESC, r.correct_ids DESC, u.username ASC
                   ) AS rank,
                   r.user_id, u.username, r.score, r.correct_ids
            FROM reputation r
            JOIN users u ON u.id = r.user_id
            ORDER BY rank
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(LeaderboardEntry::from).collect())
    }
}
