//! Path parameter extractors
//!
//! Every id in a path is a uuid; anything else is a 400, not a 404.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::{de::DeserializeOwned, Deserialize};
use uuid::Uuid;

use crate::response::ApiError;

/// Typed path parameters with uuid parsing errors mapped to `ApiError`
#[derive(Debug, Clone)]
pub struct IdPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(IdPath(inner))
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PostIdPath {
    pub post_id: Uuid,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UserIdPath {
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NotificationIdPath {
    pub notification_id: Uuid,
}
