//! Authentication primitives: JWT access tokens, refresh tokens, and
//! Argon2id password hashing.

pub mod jwt;
pub mod password;
