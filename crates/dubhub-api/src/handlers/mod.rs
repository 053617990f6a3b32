//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod health;
pub mod moderation;
pub mod notifications;
pub mod posts;
pub mod reputation;
