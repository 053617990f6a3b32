//! # dubhub-core
//!
//! Domain layer for track identification: posts, identification comments,
//! the verification status machine, reputation, notifications and the
//! moderation audit log, plus the repository traits the infrastructure implements.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, LeaderboardEntry, ModerationActionKind, ModeratorAction, Notification,
    NotificationKind, PendingVerification, Post, ReputationEntry, ReputationPolicy, User,
    VerificationUpdate,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, ModeratorActionRepository, NotificationRepository, PostRepository,
    RepoResult, ReputationRepository, UserRepository,
};
pub use value_objects::{UserRole, VerificationStatus};
