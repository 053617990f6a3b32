//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use dubhub_core::entities::{PendingVerification, Post, VerificationUpdate};
use dubhub_core::traits::{PostRepository, RepoResult};

use crate::mappers::VerificationUpdateBinds;
use crate::models::{PendingVerificationModel, PostModel};

use super::error::{map_db_error, map_foreign_key_violation, user_not_found};

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, owner_id, title, description, genre, video_url, verification_status,
                   is_verified_community, verified_by_moderator, verified_comment_id,
                   verified_by, version, created_at, updated_at
            FROM posts
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Post::try_from).transpose()
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO posts (id, owner_id, title, description, genre, video_url,
                               verification_status, is_verified_community, verified_by_moderator,
                               verified_comment_id, verified_by, version, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ",
        )
        .bind(post.id)
        .bind(post.owner_id)
        .bind(&post.title)
        .bind(&post.description)
        .bind(&post.genre)
        .bind(&post.video_url)
        .bind(post.verification_status.as_str())
        .bind(post.is_verified_community)
        .bind(post.verified_by_moderator)
        .bind(post.verified_comment_id)
        .bind(post.verified_by)
        .bind(post.version)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || user_not_found(post.owner_id)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_verification(
        &self,
        id: Uuid,
        update: &VerificationUpdate,
        expected_version: i32,
    ) -> RepoResult<Option<Post>> {
        let binds = VerificationUpdateBinds::new(update);

        // Only the verification columns are written; the version guard makes
        // the write a no-op when another request got there first.
        let result = sqlx::query_as::<_, PostModel>(
            r"
            UPDATE posts
            SET verification_status   = COALESCE($3, verification_status),
                is_verified_community = COALESCE($4, is_verified_community),
                verified_by_moderator = COALESCE($5, verified_by_moderator),
                verified_comment_id   = CASE WHEN $6 THEN $7 ELSE verified_comment_id END,
                verified_by           = CASE WHEN $8 THEN $9 ELSE verified_by END,
                version               = version + 1,
                updated_at            = NOW()
            WHERE id = $1 AND version = $2
            RETURNING id, owner_id, title, description, genre, video_url, verification_status,
                      is_verified_community, verified_by_moderator, verified_comment_id,
                      verified_by, version, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(expected_version)
        .bind(binds.verification_status)
        .bind(binds.is_verified_community)
        .bind(binds.verified_by_moderator)
        .bind(binds.set_verified_comment_id)
        .bind(binds.verified_comment_id)
        .bind(binds.set_verified_by)
        .bind(binds.verified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Post::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_pending_verifications(&self) -> RepoResult<Vec<PendingVerification>> {
        let rows = sqlx::query_as::<_, PendingVerificationModel>(
            r"
            SELECT p.id, p.owner_id, p.title, p.description, p.genre, p.video_url,
                   p.verification_status, p.is_verified_community, p.verified_by_moderator,
                   p.verified_comment_id, p.verified_by, p.version, p.created_at, p.updated_at,
                   u.username   AS owner_username,
                   u.role       AS owner_role,
                   u.created_at AS owner_created_at,
                   c.id         AS comment_id,
                   c.author_id  AS comment_author_id,
                   c.body       AS comment_body,
                   c.artist_tag AS comment_artist_tag,
                   c.created_at AS comment_created_at
            FROM posts p
            JOIN users u ON u.id = p.owner_id
            LEFT JOIN comments c ON c.id = p.verified_comment_id AND c.post_id = p.id
            WHERE p.verification_status = 'community'
            ORDER BY p.updated_at ASC, p.id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(PendingVerification::try_from).collect()
    }
}
