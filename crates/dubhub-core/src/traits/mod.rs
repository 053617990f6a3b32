//! Repository traits

mod repositories;

pub use repositories::{
    CommentRepository, ModeratorActionRepository, NotificationRepository, PostRepository,
    RepoResult, ReputationRepository, UserRepository,
};
