//! Identity service
//!
//! Resolves a Supabase bearer token to the acting user and their role.
//! The role comes from the users table and is trusted as stored.

use dubhub_common::AppError;
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::policy::Actor;

/// Identity service
pub struct IdentityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> IdentityService<'a> {
    /// Create a new IdentityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Verify the token and load the caller's role
    ///
    /// # Errors
    /// `InvalidToken`/`TokenExpired` for bad tokens, `InvalidToken` for users without a profile
    #[instrument(skip(self, token))]
    pub async fn resolve_actor(&self, token: &str) -> ServiceResult<Actor> {
        let user_id = self.ctx.jwt_service().authenticate(token)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        debug!(user_id = %user.id, role = %user.role, "Actor resolved");
        Ok(Actor::from(&user))
    }
}
