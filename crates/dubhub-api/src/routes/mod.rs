//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, moderation, notifications, posts, reputation};
use crate::state::AppState;

/// Create the main API router (health routes are separate so they skip rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(post_routes())
        .merge(moderation_routes())
        .merge(reputation_routes())
        .merge(notification_routes())
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts/:post_id", get(posts::get_post))
        .route(
            "/posts/:post_id/verification/community",
            post(posts::submit_community_verification),
        )
}

/// Moderator routes
fn moderation_routes() -> Router<AppState> {
    Router::new()
        .route("/moderation/pending", get(moderation::list_pending))
        .route("/moderation/posts/:post_id/confirm", post(moderation::confirm))
        .route("/moderation/posts/:post_id/reopen", post(moderation::reopen))
        .route("/moderation/posts/:post_id/actions", get(moderation::history))
}

/// Reputation routes
fn reputation_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id/reputation", get(reputation::get_reputation))
        .route("/leaderboard", get(reputation::leaderboard))
}

/// Notification routes
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(notifications::list))
        .route("/notifications/unread-count", get(notifications::unread_count))
        .route("/notifications/read-all", post(notifications::mark_all_read))
        .route(
            "/notifications/:notification_id/read",
            post(notifications::mark_read),
        )
}
