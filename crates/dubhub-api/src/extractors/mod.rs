//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, path ids and limits.

mod auth;
mod limit;
mod path;
mod validated;

pub use auth::AuthUser;
pub use limit::LimitQuery;
pub use path::{IdPath, NotificationIdPath, PostIdPath, UserIdPath};
pub use validated::{OptionalValidatedJson, ValidatedJson};
