//! Domain entities - core business objects

mod comment;
mod moderator_action;
mod notification;
mod post;
mod reputation;
mod user;

pub use comment::Comment;
pub use moderator_action::{ModerationActionKind, ModeratorAction};
pub use notification::{Notification, NotificationKind};
pub use post::{PendingVerification, Post, VerificationUpdate};
pub use reputation::{LeaderboardEntry, ReputationEntry, ReputationPolicy};
pub use user::User;
