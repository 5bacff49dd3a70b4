//! Submission entity model, DTOs, and joined read views.

use serde::Serialize;
use shutterdare_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A submission row from the `submissions` table.
///
/// `passes_prompt` starts false and flips to true at most once, when the
/// evaluation oracle matches both prompt words. `feedback_viewed` marks
/// whether the submitter has seen the evaluation result; a row with
/// `feedback_viewed = false` is the submitter's pending submission.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Submission {
    pub id: DbId,
    pub image_path: String,
    pub prompt_id: DbId,
    pub submitted_by: DbId,
    pub passes_prompt: bool,
    pub feedback_viewed: bool,
    pub submission_time: Timestamp,
}

/// DTO for creating a new submission. `passes_prompt` always starts false.
#[derive(Debug)]
pub struct CreateSubmission {
    pub image_path: String,
    pub prompt_id: DbId,
    pub submitted_by: DbId,
}

/// One row of a user's submission history, joined with its prompt words.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HistoryEntry {
    pub id: DbId,
    pub image_path: String,
    pub adjective: String,
    pub noun: String,
    pub passes_prompt: bool,
    pub submission_time: Timestamp,
}

/// Pass counters for one account.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PassCounts {
    /// Passed submissions, all time.
    pub all_time: i64,
    /// Passed submissions on the current UTC calendar day.
    pub today: i64,
    /// Passed submissions in the trailing 7-day sliding window.
    pub past_week: i64,
}

/// One leaderboard row: a recent passed submission annotated with the
/// submitter's username and all-time pass count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub image_path: String,
    pub adjective: String,
    pub noun: String,
    /// The submitter's all-time pass count.
    pub score: i64,
    pub submission_time: Timestamp,
}
