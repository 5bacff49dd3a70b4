//! Handlers for personal history and the global leaderboard.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use shutterdare_db::models::submission::{HistoryEntry, LeaderboardEntry, PassCounts};
use shutterdare_db::repositories::SubmissionRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Fixed leaderboard size: the 15 most recent passes, no pagination.
const LEADERBOARD_LIMIT: i64 = 15;

/// Response body for `GET /history`.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    /// The caller's submissions, most recent first.
    pub submissions: Vec<HistoryEntry>,
    /// Pass counters (all-time, today, trailing 7 days).
    pub counts: PassCounts,
}

/// GET /api/v1/history
///
/// The caller's full submission history plus pass counters.
pub async fn history(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<HistoryResponse>> {
    let submissions = SubmissionRepo::history_for_account(&state.pool, user.account_id).await?;
    let counts = SubmissionRepo::pass_counts(&state.pool, user.account_id).await?;

    Ok(Json(HistoryResponse {
        submissions,
        counts,
    }))
}

/// GET /api/v1/players
///
/// The global leaderboard: the 15 most recent passed submissions across
/// all accounts, each with the submitter's all-time pass count. The same
/// player may appear in multiple rows.
pub async fn players(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<LeaderboardEntry>>> {
    let entries = SubmissionRepo::leaderboard(&state.pool, LEADERBOARD_LIMIT).await?;
    Ok(Json(entries))
}
