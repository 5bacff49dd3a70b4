//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod history;
pub mod play;
pub mod submission;
