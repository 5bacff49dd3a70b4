//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the
//! database row plus the DTOs the handlers need (create inputs, joined
//! read views).

pub mod account;
pub mod prompt;
pub mod session;
pub mod submission;
