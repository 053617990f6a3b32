//! Authentication utilities

mod jwt;

pub use jwt::{Claims, JwtService, DEFAULT_AUDIENCE};
