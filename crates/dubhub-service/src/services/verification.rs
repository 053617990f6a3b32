//! Verification service
//!
//! Drives a post through `unverified -> community -> identified` and back to
//! `unverified` on reopen. Every status write is guarded by the post's
//! version: a lost race re-reads the post, re-runs the checks and tries again.
//! Reputation credits, the audit row and notifications happen only after the
//! status write landed, and their failures never undo it.

use dubhub_core::entities::{
    Comment, ModerationActionKind, ModeratorAction, Notification, NotificationKind, Post,
    VerificationUpdate,
};
use dubhub_core::error::DomainError;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::dto::{
    reason_within_limit, ConfirmIdentificationRequest, ModerationResponse, ModeratorActionResponse,
    PendingVerificationResponse, PostResponse, ReopenRequest, MAX_REASON_LENGTH,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notification::NotificationService;
use super::policy::{self, Actor};
use super::reputation::ReputationService;

/// Version-guarded write attempts before giving up with a conflict
pub const MAX_WRITE_ATTEMPTS: u32 = 3;

/// Verification service
pub struct VerificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VerificationService<'a> {
    /// Create a new VerificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // ========================================================================
    // Owner transitions
    // ========================================================================

    /// Owner marks a comment as the likely identification
    ///
    /// Moves `unverified` or `community` to `community`. Re-submitting while in
    /// `community` switches the selected comment.
    #[instrument(skip(self), fields(actor_id = %actor.user_id))]
    pub async fn submit_for_community_verification(
        &self,
        actor: &Actor,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> ServiceResult<PostResponse> {
        for attempt in 1..=MAX_WRITE_ATTEMPTS {
            let post = self.load_post(post_id).await?;
            policy::require_owner(actor, &post)?;
            let comment = self.load_comment_on_post(comment_id, &post).await?;
            policy::require_open_for_community(&post)?;

            let update = VerificationUpdate::community(&comment);
            let Some(updated) = self
                .ctx
                .post_repo()
                .update_verification(post.id, &update, post.version)
                .await?
            else {
                debug!(attempt, "Post changed underneath, re-reading");
                continue;
            };

            info!(
                post_id = %updated.id,
                comment_id = %comment.id,
                identifier_id = %comment.author_id,
                "Identification submitted for moderator review"
            );

            let notifications = NotificationService::new(self.ctx);
            notifications
                .emit(Notification::new(
                    self.ctx.generate_id(),
                    comment.author_id,
                    actor.user_id,
                    updated.id,
                    Some(comment.id),
                    NotificationKind::SubmittedForReview,
                ))
                .await;
            notifications
                .notify_moderators(actor.user_id, updated.id, Some(comment.id))
                .await;

            return Ok(PostResponse::from(updated));
        }

        Err(self.exhausted(post_id))
    }

    // ========================================================================
    // Moderator transitions
    // ========================================================================

    /// Moderator confirms an identification, moving the post to `identified`
    ///
    /// Without an explicit `comment_id` the owner's community pick is confirmed.
    /// Confirming straight from `unverified` is allowed.
    #[instrument(skip(self, request), fields(actor_id = %actor.user_id))]
    pub async fn moderator_confirm(
        &self,
        actor: &Actor,
        post_id: Uuid,
        request: ConfirmIdentificationRequest,
    ) -> ServiceResult<ModerationResponse> {
        policy::require_moderator(actor)?;

        for attempt in 1..=MAX_WRITE_ATTEMPTS {
            let post = self.load_post(post_id).await?;
            let comment_id = policy::resolve_confirm_comment(&post, request.comment_id)?;
            let comment = self.load_comment_on_post(comment_id, &post).await?;

            if already_confirmed(&post, &comment) {
                info!(post_id = %post.id, comment_id = %comment.id, "Identification already confirmed");
                return Ok(ModerationResponse {
                    success: true,
                    post: PostResponse::from(post),
                });
            }

            let update = VerificationUpdate::confirmed(&comment);
            let Some(updated) = self
                .ctx
                .post_repo()
                .update_verification(post.id, &update, post.version)
                .await?
            else {
                debug!(attempt, "Post changed underneath, re-reading");
                continue;
            };

            info!(
                post_id = %updated.id,
                comment_id = %comment.id,
                identifier_id = %comment.author_id,
                previous_status = %post.verification_status,
                "Identification confirmed"
            );

            self.after_confirm(actor, &updated, &comment).await;

            return Ok(ModerationResponse {
                success: true,
                post: PostResponse::from(updated),
            });
        }

        Err(self.exhausted(post_id))
    }

    /// Moderator rejects the current identification, moving the post back to `unverified`
    ///
    /// Reputation already granted for the rejected identification is kept.
    #[instrument(skip(self, request), fields(actor_id = %actor.user_id))]
    pub async fn moderator_reopen(
        &self,
        actor: &Actor,
        post_id: Uuid,
        request: ReopenRequest,
    ) -> ServiceResult<ModerationResponse> {
        policy::require_moderator(actor)?;
        let reason = normalize_reason(request.reason)?;

        for attempt in 1..=MAX_WRITE_ATTEMPTS {
            let post = self.load_post(post_id).await?;

            let Some(updated) = self
                .ctx
                .post_repo()
                .update_verification(post.id, &VerificationUpdate::reopened(), post.version)
                .await?
            else {
                debug!(attempt, "Post changed underneath, re-reading");
                continue;
            };

            info!(
                post_id = %updated.id,
                previous_status = %post.verification_status,
                "Post reopened"
            );

            self.record_action(
                ModeratorAction::new(
                    self.ctx.generate_id(),
                    updated.id,
                    actor.user_id,
                    ModerationActionKind::Reopened,
                    post.verified_comment_id,
                )
                .with_reason(reason.clone()),
            )
            .await;

            if let Some(previous_identifier) = post.verified_by {
                NotificationService::new(self.ctx)
                    .emit(
                        Notification::new(
                            self.ctx.generate_id(),
                            previous_identifier,
                            actor.user_id,
                            updated.id,
                            post.verified_comment_id,
                            NotificationKind::IdRejected,
                        )
                        .with_detail(reason.as_deref()),
                    )
                    .await;
            }

            return Ok(ModerationResponse {
                success: true,
                post: PostResponse::from(updated),
            });
        }

        Err(self.exhausted(post_id))
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Moderator review queue, oldest submission first
    #[instrument(skip(self), fields(actor_id = %actor.user_id))]
    pub async fn list_pending_verifications(
        &self,
        actor: &Actor,
    ) -> ServiceResult<Vec<PendingVerificationResponse>> {
        policy::require_moderator(actor)?;

        let pending = self.ctx.post_repo().find_pending_verifications().await?;
        Ok(pending
            .into_iter()
            .map(PendingVerificationResponse::from)
            .collect())
    }

    /// Get a post with its verification state
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: Uuid) -> ServiceResult<PostResponse> {
        let post = self.load_post(post_id).await?;
        Ok(PostResponse::from(post))
    }

    /// Moderation decisions recorded for a post, oldest first
    #[instrument(skip(self), fields(actor_id = %actor.user_id))]
    pub async fn moderation_history(
        &self,
        actor: &Actor,
        post_id: Uuid,
    ) -> ServiceResult<Vec<ModeratorActionResponse>> {
        policy::require_moderator(actor)?;
        self.load_post(post_id).await?;

        let actions = self.ctx.moderator_action_repo().find_by_post(post_id).await?;
        Ok(actions
            .into_iter()
            .map(ModeratorActionResponse::from)
            .collect())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn load_post(&self, post_id: Uuid) -> ServiceResult<Post> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::PostNotFound(post_id).into())
    }

    async fn load_comment_on_post(&self, comment_id: Uuid, post: &Post) -> ServiceResult<Comment> {
        let comment = self.ctx.comment_repo().find_by_id(comment_id).await?;
        Ok(policy::require_comment_on_post(comment, comment_id, post)?)
    }

    async fn after_confirm(&self, actor: &Actor, post: &Post, comment: &Comment) {
        let reputation = ReputationService::new(self.ctx);
        if let Err(e) = reputation.credit_identification(comment.author_id).await {
            warn!(error = %e, user_id = %comment.author_id, "Failed to credit identification");
        }
        if let Err(e) = reputation.credit_moderation(actor.user_id).await {
            warn!(error = %e, user_id = %actor.user_id, "Failed to credit moderation");
        }

        self.record_action(ModeratorAction::new(
            self.ctx.generate_id(),
            post.id,
            actor.user_id,
            ModerationActionKind::ConfirmedId,
            Some(comment.id),
        ))
        .await;

        NotificationService::new(self.ctx)
            .emit(Notification::new(
                self.ctx.generate_id(),
                comment.author_id,
                actor.user_id,
                post.id,
                Some(comment.id),
                NotificationKind::IdConfirmed,
            ))
            .await;
    }

    async fn record_action(&self, action: ModeratorAction) {
        if let Err(e) = self.ctx.moderator_action_repo().create(&action).await {
            warn!(error = %e, post_id = %action.post_id, action = %action.action, "Failed to record moderator action");
        }
    }

    fn exhausted(&self, post_id: Uuid) -> ServiceError {
        warn!(post_id = %post_id, attempts = MAX_WRITE_ATTEMPTS, "Gave up after repeated version conflicts");
        DomainError::ConcurrentModification(post_id).into()
    }
}

/// Whether the post is already identified by exactly this comment
fn already_confirmed(post: &Post, comment: &Comment) -> bool {
    post.verification_status.is_identified()
        && post.verified_comment_id == Some(comment.id)
        && post.verified_by == Some(comment.author_id)
}

/// Trim the reason, dropping it when blank
fn normalize_reason(reason: Option<String>) -> ServiceResult<Option<String>> {
    let Some(reason) = reason else {
        return Ok(None);
    };

    if !reason_within_limit(&reason) {
        return Err(ServiceError::validation(format!(
            "Reason must be at most {MAX_REASON_LENGTH} characters"
        )));
    }

    let trimmed = reason.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}
