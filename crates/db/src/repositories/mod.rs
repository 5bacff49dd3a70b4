//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod account_repo;
pub mod prompt_repo;
pub mod session_repo;
pub mod submission_repo;

pub use account_repo::AccountRepo;
pub use prompt_repo::PromptRepo;
pub use session_repo::SessionRepo;
pub use submission_repo::SubmissionRepo;
