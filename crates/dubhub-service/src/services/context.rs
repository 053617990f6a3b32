//! Service context - dependency container for services
//!
//! Holds the repositories and other dependencies the services need.
//! Everything is injected; nothing reaches for a global client.

use std::sync::Arc;

use dubhub_common::auth::JwtService;
use dubhub_core::entities::ReputationPolicy;
use dubhub_core::traits::{
    CommentRepository, ModeratorActionRepository, NotificationRepository, PostRepository,
    ReputationRepository, UserRepository,
};
use dubhub_db::PgPool;
use uuid::Uuid;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Provides access to:
/// - Database repositories
/// - JWT verifier for Supabase access tokens
/// - Reputation point values
/// - The PostgreSQL pool (for readiness checks), when running against a database
#[derive(Clone)]
pub struct ServiceContext {
    pool: Option<PgPool>,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    post_repo: Arc<dyn PostRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reputation_repo: Arc<dyn ReputationRepository>,
    notification_repo: Arc<dyn NotificationRepository>,
    moderator_action_repo: Arc<dyn ModeratorActionRepository>,

    jwt_service: Arc<JwtService>,
    reputation_policy: ReputationPolicy,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if the context was built with one
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the reputation repository
    pub fn reputation_repo(&self) -> &dyn ReputationRepository {
        self.reputation_repo.as_ref()
    }

    /// Get the notification repository
    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    /// Get the moderator action repository
    pub fn moderator_action_repo(&self) -> &dyn ModeratorActionRepository {
        self.moderator_action_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Points granted per confirmation
    pub fn reputation_policy(&self) -> ReputationPolicy {
        self.reputation_policy
    }

    /// Generate a new row id
    pub fn generate_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("reputation_policy", &self.reputation_policy)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reputation_repo: Option<Arc<dyn ReputationRepository>>,
    notification_repo: Option<Arc<dyn NotificationRepository>>,
    moderator_action_repo: Option<Arc<dyn ModeratorActionRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    reputation_policy: Option<ReputationPolicy>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reputation_repo(mut self, repo: Arc<dyn ReputationRepository>) -> Self {
        self.reputation_repo = Some(repo);
        self
    }

    pub fn notification_repo(mut self, repo: Arc<dyn NotificationRepository>) -> Self {
        self.notification_repo = Some(repo);
        self
    }

    pub fn moderator_action_repo(mut self, repo: Arc<dyn ModeratorActionRepository>) -> Self {
        self.moderator_action_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Override the default point values
    pub fn reputation_policy(mut self, policy: ReputationPolicy) -> Self {
        self.reputation_policy = Some(policy);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            pool: self.pool,
            user_repo: self.user_repo.ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            post_repo: self.post_repo.ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            comment_repo: self
                .comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            reputation_repo: self
                .reputation_repo
                .ok_or_else(|| ServiceError::validation("reputation_repo is required"))?,
            notification_repo: self
                .notification_repo
                .ok_or_else(|| ServiceError::validation("notification_repo is required"))?,
            moderator_action_repo: self
                .moderator_action_repo
                .ok_or_else(|| ServiceError::validation("moderator_action_repo is required"))?,
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            reputation_policy: self.reputation_policy.unwrap_or_default(),
        })
    }
}
