//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance and DATABASE_URL.
//! Migrations are applied on startup from the workspace `migrations/` dir.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use dubhub_core::UserRole;
use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use uuid::Uuid;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_missing_and_invalid_tokens() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/notifications").await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "MISSING_AUTHORIZATION")
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/notifications", "not.a.token")
        .await
        .unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "INVALID_TOKEN")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_token_for_unknown_user_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let ghost = dubhub_core::User::new(Uuid::new_v4(), "ghost".to_string(), UserRole::User);
    let token = server.token_for(&ghost).unwrap();

    let response = server.get_auth("/api/v1/notifications", &token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Verification Workflow Tests
// ============================================================================

#[tokio::test]
async fn test_full_verification_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.seed_user(UserRole::User).await.unwrap();
    let identifier = server.seed_user(UserRole::User).await.unwrap();
    let moderator = server.seed_user(UserRole::Moderator).await.unwrap();
    let post = server.seed_post(&owner).await.unwrap();
    let comment = server.seed_comment(&post, &identifier).await.unwrap();

    let owner_token = server.token_for(&owner).unwrap();
    let identifier_token = server.token_for(&identifier).unwrap();
    let moderator_token = server.token_for(&moderator).unwrap();

    // Owner escalates the comment
    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/verification/community", post.id),
            &owner_token,
            &CommunityVerificationBody {
                comment_id: comment.id,
            },
        )
        .await
        .unwrap();
    let body: PostBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.verification_status, "community");
    assert!(body.is_verified_community);
    assert_eq!(body.verified_by, Some(identifier.id));

    // Identifier was told
    let response = server
        .get_auth("/api/v1/notifications/unread-count", &identifier_token)
        .await
        .unwrap();
    let unread: UnreadCountBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unread.unread, 1);

    // Post shows up in the review queue
    let response = server
        .get_auth("/api/v1/moderation/pending", &moderator_token)
        .await
        .unwrap();
    let pending: Vec<PendingBody> = assert_json(response, StatusCode::OK).await.unwrap();
    let entry = pending
        .iter()
        .find(|p| p.post.id == post.id)
        .expect("post in review queue");
    assert_eq!(entry.owner.id, owner.id);
    assert_eq!(entry.comment.as_ref().map(|c| c.id), Some(comment.id));

    // Moderator confirms the owner's pick with an empty body
    let response = server
        .post_auth_empty(
            &format!("/api/v1/moderation/posts/{}/confirm", post.id),
            &moderator_token,
        )
        .await
        .unwrap();
    let confirmed: ModerationBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(confirmed.success);
    assert_eq!(confirmed.post.verification_status, "identified");
    assert!(confirmed.post.verified_by_moderator);
    assert!(confirmed.post.is_verified_community);

    // Identifier earned karma
    let response = server
        .get_auth(
            &format!("/api/v1/users/{}/reputation", identifier.id),
            &identifier_token,
        )
        .await
        .unwrap();
    let reputation: ReputationBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!((reputation.score, reputation.correct_ids), (10, 1));

    // Audit trail
    let response = server
        .get_auth(
            &format!("/api/v1/moderation/posts/{}/actions", post.id),
            &moderator_token,
        )
        .await
        .unwrap();
    let actions: Vec<ActionBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].action, "confirmed_id");
    assert_eq!(actions[0].comment_id, Some(comment.id));

    // Moderator changes their mind
    let response = server
        .post_auth(
            &format!("/api/v1/moderation/posts/{}/reopen", post.id),
            &moderator_token,
            &ReopenBody {
                reason: Some("That is the original, not the VIP".to_string()),
            },
        )
        .await
        .unwrap();
    let reopened: ModerationBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reopened.post.verification_status, "unverified");
    assert_eq!(reopened.post.verified_comment_id, None);
    assert_eq!(reopened.post.verified_by, None);

    // Reputation is kept, rejection is delivered with the reason
    let response = server
        .get_auth(
            &format!("/api/v1/users/{}/reputation", identifier.id),
            &identifier_token,
        )
        .await
        .unwrap();
    let reputation: ReputationBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reputation.score, 10);

    let response = server
        .get_auth("/api/v1/notifications", &identifier_token)
        .await
        .unwrap();
    let notifications: Vec<NotificationBody> = assert_json(response, StatusCode::OK).await.unwrap();
    let rejection = notifications
        .iter()
        .find(|n| n.kind == "id_rejected")
        .expect("rejection notification");
    assert!(rejection.message.contains("not the VIP"));
}

#[tokio::test]
async fn test_only_owner_can_submit() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.seed_user(UserRole::User).await.unwrap();
    let stranger = server.seed_user(UserRole::Artist).await.unwrap();
    let post = server.seed_post(&owner).await.unwrap();
    let comment = server.seed_comment(&post, &stranger).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/verification/community", post.id),
            &server.token_for(&stranger).unwrap(),
            &CommunityVerificationBody {
                comment_id: comment.id,
            },
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN, "NOT_POST_OWNER")
        .await
        .unwrap();

    let response = server
        .get_auth(
            &format!("/api/v1/posts/{}", post.id),
            &server.token_for(&owner).unwrap(),
        )
        .await
        .unwrap();
    let body: PostBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.verification_status, "unverified");
    assert_eq!(body.version, 0);
}

#[tokio::test]
async fn test_moderation_requires_moderator() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.seed_user(UserRole::User).await.unwrap();
    let artist = server.seed_user(UserRole::Artist).await.unwrap();
    let post = server.seed_post(&owner).await.unwrap();
    let comment = server.seed_comment(&post, &artist).await.unwrap();
    let token = server.token_for(&artist).unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/moderation/posts/{}/confirm", post.id),
            &token,
            &ConfirmBody {
                comment_id: Some(comment.id),
            },
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN, "NOT_MODERATOR")
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/moderation/pending", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_confirm_without_selection() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.seed_user(UserRole::User).await.unwrap();
    let moderator = server.seed_user(UserRole::Moderator).await.unwrap();
    let post = server.seed_post(&owner).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/moderation/posts/{}/confirm", post.id),
            &server.token_for(&moderator).unwrap(),
            &ConfirmBody::default(),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "NO_COMMENT_TO_CONFIRM")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_submit_after_identified_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.seed_user(UserRole::User).await.unwrap();
    let identifier = server.seed_user(UserRole::User).await.unwrap();
    let moderator = server.seed_user(UserRole::Moderator).await.unwrap();
    let post = server.seed_post(&owner).await.unwrap();
    let comment = server.seed_comment(&post, &identifier).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/moderation/posts/{}/confirm", post.id),
            &server.token_for(&moderator).unwrap(),
            &ConfirmBody {
                comment_id: Some(comment.id),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/verification/community", post.id),
            &server.token_for(&owner).unwrap(),
            &CommunityVerificationBody {
                comment_id: comment.id,
            },
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::CONFLICT, "ALREADY_IDENTIFIED")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_bad_input_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.seed_user(UserRole::User).await.unwrap();
    let moderator = server.seed_user(UserRole::Moderator).await.unwrap();
    let post = server.seed_post(&owner).await.unwrap();
    let token = server.token_for(&moderator).unwrap();

    let response = server
        .get_auth("/api/v1/posts/not-a-uuid", &token)
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_PATH_PARAMETER")
        .await
        .unwrap();

    let response = server
        .get_auth(&format!("/api/v1/posts/{}", Uuid::new_v4()), &token)
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_POST")
        .await
        .unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/moderation/posts/{}/reopen", post.id),
            &token,
            &ReopenBody {
                reason: Some("x".repeat(501)),
            },
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_padded_reopen_reason_is_trimmed_not_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.seed_user(UserRole::User).await.unwrap();
    let moderator = server.seed_user(UserRole::Moderator).await.unwrap();
    let post = server.seed_post(&owner).await.unwrap();
    let token = server.token_for(&moderator).unwrap();

    let reason = "x".repeat(490);
    let response = server
        .post_auth(
            &format!("/api/v1/moderation/posts/{}/reopen", post.id),
            &token,
            &ReopenBody {
                reason: Some(format!("{reason}{}", " ".repeat(20))),
            },
        )
        .await
        .unwrap();
    let reopened: ModerationBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(reopened.success);

    let response = server
        .get_auth(&format!("/api/v1/moderation/posts/{}/actions", post.id), &token)
        .await
        .unwrap();
    let actions: Vec<ActionBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].reason.as_deref(), Some(reason.as_str()));
}

// ============================================================================
// Reputation & Notification Tests
// ============================================================================

#[tokio::test]
async fn test_leaderboard_is_public_and_clamped() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/leaderboard?limit=1000").await.unwrap();
    let board: LeaderboardBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(board.limit, 100);
    assert!(board.entries.len() <= 100);
    assert!(board
        .entries
        .windows(2)
        .all(|w| w[0].score >= w[1].score && w[0].rank < w[1].rank));
}

#[tokio::test]
async fn test_cannot_mark_someone_elses_notification() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.seed_user(UserRole::User).await.unwrap();
    let identifier = server.seed_user(UserRole::User).await.unwrap();
    let post = server.seed_post(&owner).await.unwrap();
    let comment = server.seed_comment(&post, &identifier).await.unwrap();
    let owner_token = server.token_for(&owner).unwrap();
    let identifier_token = server.token_for(&identifier).unwrap();

    server
        .post_auth(
            &format!("/api/v1/posts/{}/verification/community", post.id),
            &owner_token,
            &CommunityVerificationBody {
                comment_id: comment.id,
            },
        )
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/notifications", &identifier_token)
        .await
        .unwrap();
    let notifications: Vec<NotificationBody> = assert_json(response, StatusCode::OK).await.unwrap();
    let notification = notifications
        .iter()
        .find(|n| n.post_id == post.id)
        .expect("submitted notification");
    assert!(!notification.read);

    let path = format!("/api/v1/notifications/{}/read", notification.id);
    let response = server.post_auth_empty(&path, &owner_token).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_NOTIFICATION")
        .await
        .unwrap();

    let response = server.post_auth_empty(&path, &identifier_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post_auth_empty("/api/v1/notifications/read-all", &identifier_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth("/api/v1/notifications/unread-count", &identifier_token)
        .await
        .unwrap();
    let unread: UnreadCountBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unread.unread, 0);
}
