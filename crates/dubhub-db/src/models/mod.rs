//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod moderator_action;
mod notification;
mod post;
mod reputation;
mod user;

pub use comment::CommentModel;
pub use moderator_action::ModeratorActionModel;
pub use notification::NotificationModel;
pub use post::{PendingVerificationModel, PostModel};
pub use reputation::{LeaderboardRowModel, ReputationModel};
pub use user::UserModel;
