//! PostgreSQL implementation of ModeratorActionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use dubhub_core::entities::ModeratorAction;
use dubhub_core::traits::{ModeratorActionRepository, RepoResult};

use crate::models::ModeratorActionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ModeratorActionRepository
#[derive(Clone)]
pub struct PgModeratorActionRepository {
    pool: PgPool,
}

impl PgModeratorActionRepository {
    /// Create a new PgModeratorActionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ModeratorActionRepository for PgModeratorActionRepository {
    #[instrument(skip(self, action), fields(post_id = %action.post_id, action = %action.action))]
    async fn create(&self, action: &ModeratorAction) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO moderator_actions (id, post_id, moderator_id, action, comment_id, reason, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(action.id)
        .bind(action.post_id)
        .bind(action.moderator_id)
        .bind(action.action.as_str())
        .bind(action.comment_id)
        .bind(&action.reason)
        .bind(action.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: Uuid) -> RepoResult<Vec<ModeratorAction>> {
        let rows = sqlx::query_as::<_, ModeratorActionModel>(
            r"
            SELECT id, post_id, moderator_id, action, comment_id, reason, created_at
            FROM moderator_actions
            WHERE post_id = $1
            ORDER BY created_at ASC, id ASC
            ",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(ModeratorAction::try_from).collect()
    }
}
