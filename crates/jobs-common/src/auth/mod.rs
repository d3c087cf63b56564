//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{Claims, JwtService, AUDIENCE, ISSUER, TOKEN_LIFETIME_SECS};
pub use password::{hash_password, verify_password, Argon2Hasher};
