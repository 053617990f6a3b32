//! Business logic services
//!
//! This module contains the verification engine and the reputation,
//! notification and identity services it is built from.

pub mod context;
pub mod error;
pub mod identity;
pub mod notification;
pub mod policy;
pub mod reputation;
pub mod verification;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use identity::IdentityService;
pub use notification::NotificationService;
pub use policy::Actor;
pub use reputation::ReputationService;
pub use verification::{VerificationService, MAX_WRITE_ATTEMPTS};
