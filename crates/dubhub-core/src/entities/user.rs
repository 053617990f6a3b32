//! User entity - a platform account (auth itself lives in Supabase)

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::UserRole;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with the given role
    pub fn new(id: Uuid, username: String, role: UserRole) -> Self {
        Self {
            id,
            username,
            role,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_moderator(&self) -> bool {
        self.role.is_moderator()
    }
}
