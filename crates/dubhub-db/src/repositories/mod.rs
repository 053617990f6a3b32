//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in dubhub-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod error;
mod moderator_action;
mod notification;
mod post;
mod reputation;
mod user;

pub use comment::PgCommentRepository;
pub use moderator_action::PgModeratorActionRepository;
pub use notification::PgNotificationRepository;
pub use post::PgPostRepository;
pub use reputation::PgReputationRepository;
pub use user::PgUserRepository;
