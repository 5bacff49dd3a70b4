//! Account entity model and DTOs.

use serde::Serialize;
use shutterdare_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full account row from the `accounts` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`AccountInfo`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// Safe account representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct AccountInfo {
    pub id: DbId,
    pub username: String,
    pub email: String,
}

impl From<&Account> for AccountInfo {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            email: account.email.clone(),
        }
    }
}

/// DTO for creating a new account. The password arrives pre-hashed.
#[derive(Debug)]
pub struct CreateAccount {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
