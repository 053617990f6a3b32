//! Integration test utilities for the DubHub API
//!
//! Spawns the real router against PostgreSQL, seeds users/posts/comments
//! through the repositories and mints Supabase-shaped tokens.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
