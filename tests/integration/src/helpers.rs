//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, seeding data and
//! making authenticated HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use dubhub_api::{create_app, create_app_state, AppState};
use dubhub_common::{
    AppConfig, AppSettings, AuthConfig, CorsConfig, DatabaseConfig, Environment, RateLimitConfig,
    ReputationConfig, ServerConfig, DEFAULT_AUDIENCE,
};
use dubhub_core::{Comment, Post, User, UserRole};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::fixtures::unique_suffix;

/// Secret used when SUPABASE_JWT_SECRET is not set
const FALLBACK_JWT_SECRET: &str = "integration-test-secret-integration-test-secret";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub state: AppState,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state.clone());

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            state,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Make a POST request with auth token and JSON body
    pub async fn post_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a POST request with auth token and no body
    pub async fn post_auth_empty(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    // ========================================================================
    // Seeding
    // ========================================================================

    /// Insert a user with the given role
    pub async fn seed_user(&self, role: UserRole) -> Result<User> {
        let user = User::new(Uuid::new_v4(), format!("digger{}", unique_suffix()), role);
        self.state.service_context().user_repo().create(&user).await?;
        Ok(user)
    }

    /// Insert an unverified post owned by `owner`
    pub async fn seed_post(&self, owner: &User) -> Result<Post> {
        let post = Post::new(
            Uuid::new_v4(),
            owner.id,
            format!("ID? dubplate #{}", unique_suffix()),
            "https://cdn.example.com/clips/test.mp4".to_string(),
        );
        self.state.service_context().post_repo().create(&post).await?;
        Ok(post)
    }

    /// Insert a comment on `post` by `author`
    pub async fn seed_comment(&self, post: &Post, author: &User) -> Result<Comment> {
        let comment = Comment::new(
            Uuid::new_v4(),
            post.id,
            author.id,
            "Pretty sure this is the unreleased VIP".to_string(),
        );
        self.state.service_context().comment_repo().create(&comment).await?;
        Ok(comment)
    }

    /// Mint an access token for the user
    pub fn token_for(&self, user: &User) -> Result<String> {
        Ok(self
            .state
            .service_context()
            .jwt_service()
            .issue_access_token(user.id, 600)?)
    }
}

/// Build a test configuration from the environment
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let url = std::env::var("DATABASE_URL")?;
    let migrations_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../../migrations").to_string();

    Ok(AppConfig {
        app: AppSettings {
            name: "dubhub-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url,
            max_connections: 5,
            min_connections: 1,
            migrations_dir: Some(migrations_dir),
        },
        auth: AuthConfig {
            jwt_secret: std::env::var("SUPABASE_JWT_SECRET")
                .unwrap_or_else(|_| FALLBACK_JWT_SECRET.to_string()),
            jwt_audience: DEFAULT_AUDIENCE.to_string(),
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 1000,
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
        reputation: ReputationConfig::default(),
    })
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}

/// Assert an error envelope with the given status and code
pub async fn assert_error(response: Response, expected_status: StatusCode, code: &str) -> Result<()> {
    let body: crate::fixtures::ErrorResponse = assert_json(response, expected_status).await?;
    anyhow::ensure!(
        body.error.code == code,
        "Expected error code {code}, got {}",
        body.error.code
    );
    Ok(())
}
