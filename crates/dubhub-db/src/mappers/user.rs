//! User entity <-> model mapper

use dubhub_core::entities::User;
use dubhub_core::value_objects::UserRole;

use crate::models::UserModel;

/// Convert database role string to UserRole, treating unknown values as plain users
pub(crate) fn parse_role(role: &str) -> UserRole {
    role.parse().unwrap_or_default()
}

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            username: model.username,
            role: parse_role(&model.role),
            created_at: model.created_at,
        }
    }
}
