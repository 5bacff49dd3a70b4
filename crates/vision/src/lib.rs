//! Evaluation-oracle adapter for the external image-recognition service.
//!
//! The service is an opaque oracle: it receives image bytes and returns
//! detected label descriptions. This crate wraps the HTTP call
//! ([`client::VisionClient`]) and the thin comparison layer that turns
//! labels into per-word match booleans ([`labels::match_prompt`]). No
//! image analysis happens here.

pub mod client;
pub mod labels;

pub use client::{LabelSource, VisionClient, VisionError};
pub use labels::match_prompt;
