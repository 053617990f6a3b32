//! PostgreSQL implementation of NotificationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use dubhub_core::entities::Notification;
use dubhub_core::traits::{NotificationRepository, RepoResult};

use crate::models::NotificationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of NotificationRepository
#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    /// Create a new PgNotificationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    #[instrument(skip(self, notification), fields(recipient_id = %notification.recipient_id, kind = %notification.kind))]
    async fn create(&self, notification: &Notification) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO notifications (id, recipient_id, triggered_by_user_id, post_id, comment_id,
                                       kind, message, read, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(notification.id)
        .bind(notification.recipient_id)
        .bind(notification.triggered_by_user_id)
        .bind(notification.post_id)
        .bind(notification.comment_id)
        .bind(notification.kind.as_str())
        .bind(&notification.message)
        .bind(notification.read)
        .bind(notification.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_recipient(&self, recipient_id: Uuid, limit: i64) -> RepoResult<Vec<Notification>> {
        let rows = sqlx::query_as::<_, NotificationModel>(
            r"
            SELECT id, recipient_id, triggered_by_user_id, post_id, comment_id,
                   kind, message, read, created_at
            FROM notifications
            WHERE recipient_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            ",
        )
        .bind(recipient_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Notification::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn unread_count(&self, recipient_id: Uuid) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM notifications WHERE recipient_id = $1 AND NOT read
            ",
        )
        .bind(recipient_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn mark_read(&self, id: Uuid, recipient_id: Uuid) -> RepoResult<bool> {
        // Matching on the recipient keeps other users' notifications invisible
        let found = sqlx::query_scalar::<_, Uuid>(
            r"
            UPDATE notifications
            SET read = TRUE
            WHERE id = $1 AND recipient_id = $2
            RETURNING id
            ",
        )
        .bind(id)
        .bind(recipient_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(found.is_some())
    }

    #[instrument(skip(self))]
    async fn mark_all_read(&self, recipient_id: Uuid) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE notifications
            SET read = TRUE
            WHERE recipient_id = $1 AND NOT read
            ",
        )
        .bind(recipient_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
