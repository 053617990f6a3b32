//! Value objects - immutable types that represent domain concepts

mod user_role;
mod verification_status;

pub use user_role::{UserRole, UserRoleParseError};
pub use verification_status::{VerificationStatus, VerificationStatusParseError};
