//! Repository for the `account_sessions` table.

use shutterdare_core::types::DbId;
use sqlx::PgPool;

use crate::models::session::{AccountSession, CreateSession};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, account_id, refresh_token_hash, expires_at, is_revoked, created_at";

/// Provides CRUD operations for refresh-token sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSession,
    ) -> Result<AccountSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO account_sessions (account_id, refresh_token_hash, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AccountSession>(&query)
            .bind(input.account_id)
            .bind(&input.refresh_token_hash)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find an active session by its refresh token hash.
    ///
    /// Only returns sessions that are not revoked and not expired.
    pub async fn find_by_refresh_token_hash(
        pool: &PgPool,
        hash: &str,
    ) -> Result<Option<AccountSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM account_sessions
             WHERE refresh_token_hash = $1
               AND is_revoked = false
               AND expires_at > NOW()"
        );
        sqlx::query_as::<_, AccountSession>(&query)
            .bind(hash)
            .fetch_optional(pool)
            .await
    }

    /// Revoke a single session. Returns `true` if the row was updated.
    pub async fn revoke(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE account_sessions SET is_revoked = true WHERE id = $1 AND is_revoked = false",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Revoke all active sessions for an account. Returns the revoked count.
    pub async fn revoke_all_for_account(
        pool: &PgPool,
        account_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE account_sessions SET is_revoked = true
             WHERE account_id = $1 AND is_revoked = false",
        )
        .bind(account_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
