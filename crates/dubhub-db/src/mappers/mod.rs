//! Entity to model mappers
//!
//! Conversions between domain entities (dubhub-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `TryFrom` where a text column must name a known variant
//! - `VerificationUpdateBinds`: flatten a partial update for binding

mod comment;
mod notification;
mod post;
mod reputation;
mod user;

pub use post::VerificationUpdateBinds;
