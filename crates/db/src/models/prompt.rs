//! Prompt entity model.

use serde::Serialize;
use shutterdare_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A prompt row from the `prompts` table.
///
/// Prompts are immutable once created; only `is_active` flips when a
/// pass exhausts the prompt and a new one is activated.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Prompt {
    pub id: DbId,
    pub adjective: String,
    pub noun: String,
    pub is_active: bool,
    pub created_at: Timestamp,
}
