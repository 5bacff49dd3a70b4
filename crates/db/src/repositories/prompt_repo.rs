//! Repository for the `prompts` table.
//!
//! The "current" prompt is an explicit pointer: exactly one row has
//! `is_active = true`, enforced by the partial unique index
//! `uq_prompts_active`. Activating a new prompt deactivates the old one
//! in the same transaction.

use sqlx::PgPool;

use crate::models::prompt::Prompt;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, adjective, noun, is_active, created_at";

/// Provides operations on prompts.
pub struct PromptRepo;

impl PromptRepo {
    /// Fetch the active prompt, or `None` if no prompt exists yet.
    pub async fn active(pool: &PgPool) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompts WHERE is_active = true");
        sqlx::query_as::<_, Prompt>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Find a prompt by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: shutterdare_core::types::DbId,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompts WHERE id = $1");
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Deactivate the current prompt (if any) and insert a new active one.
    ///
    /// Runs both statements in one transaction so the single-active-prompt
    /// invariant holds even if two generators race.
    pub async fn activate_new(
        pool: &PgPool,
        adjective: &str,
        noun: &str,
    ) -> Result<Prompt, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("UPDATE prompts SET is_active = false WHERE is_active = true")
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO prompts (adjective, noun, is_active)
             VALUES ($1, $2, true)
             RETURNING {COLUMNS}"
        );
        let prompt = sqlx::query_as::<_, Prompt>(&query)
            .bind(adjective)
            .bind(noun)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(prompt)
    }
}
