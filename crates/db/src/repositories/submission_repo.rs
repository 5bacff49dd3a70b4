//! Repository for the `submissions` table.

use shutterdare_core::types::DbId;
use sqlx::PgPool;

use crate::models::submission::{
    CreateSubmission, HistoryEntry, LeaderboardEntry, PassCounts, Submission,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, image_path, prompt_id, submitted_by, passes_prompt, \
                        feedback_viewed, submission_time";

/// Provides operations on submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a new submission with `passes_prompt = false`.
    ///
    /// Violating `uq_submissions_pending` (a pending submission already
    /// exists for the account) or `uq_submissions_image_path` surfaces as
    /// a sqlx database error; the caller is responsible for the
    /// compensating deletion of the stored image file.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSubmission,
    ) -> Result<Submission, sqlx::Error> {
        let query = format!(
            "INSERT INTO submissions (image_path, prompt_id, submitted_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(&input.image_path)
            .bind(input.prompt_id)
            .bind(input.submitted_by)
            .fetch_one(pool)
            .await
    }

    /// Find a submission by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions WHERE id = $1");
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the account's pending submission (feedback not yet viewed).
    ///
    /// At most one exists per account (`uq_submissions_pending`).
    pub async fn find_pending_for_account(
        pool: &PgPool,
        account_id: DbId,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions
             WHERE submitted_by = $1 AND feedback_viewed = false"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(account_id)
            .fetch_optional(pool)
            .await
    }

    /// Clear any pending marker for the account (before a new upload).
    ///
    /// Returns the number of rows cleared (0 or 1).
    pub async fn clear_pending_for_account(
        pool: &PgPool,
        account_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE submissions SET feedback_viewed = true
             WHERE submitted_by = $1 AND feedback_viewed = false",
        )
        .bind(account_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Mark a submission as passed.
    ///
    /// The `passes_prompt = false` guard makes the transition monotonic:
    /// a passed submission is never rewritten. Returns `true` if the row
    /// transitioned.
    pub async fn mark_passed(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE submissions SET passes_prompt = true
             WHERE id = $1 AND passes_prompt = false",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark a submission's feedback as viewed, clearing the pending state.
    ///
    /// Returns `true` if the row was still pending.
    pub async fn mark_feedback_viewed(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE submissions SET feedback_viewed = true
             WHERE id = $1 AND feedback_viewed = false",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All of an account's submissions, most recent first, with prompt words.
    pub async fn history_for_account(
        pool: &PgPool,
        account_id: DbId,
    ) -> Result<Vec<HistoryEntry>, sqlx::Error> {
        sqlx::query_as::<_, HistoryEntry>(
            "SELECT s.id, s.image_path, p.adjective, p.noun, s.passes_prompt, s.submission_time
             FROM submissions s
             JOIN prompts p ON p.id = s.prompt_id
             WHERE s.submitted_by = $1
             ORDER BY s.submission_time DESC",
        )
        .bind(account_id)
        .fetch_all(pool)
        .await
    }

    /// Pass counters for an account: all-time, current UTC calendar day,
    /// and the trailing 7-day sliding window (strictly newer than
    /// `NOW() - 7 days`, computed at query time).
    pub async fn pass_counts(pool: &PgPool, account_id: DbId) -> Result<PassCounts, sqlx::Error> {
        sqlx::query_as::<_, PassCounts>(
            "SELECT
                COUNT(*) FILTER (WHERE passes_prompt) AS all_time,
                COUNT(*) FILTER (WHERE passes_prompt
                    AND (submission_time AT TIME ZONE 'UTC')::date
                        = (NOW() AT TIME ZONE 'UTC')::date) AS today,
                COUNT(*) FILTER (WHERE passes_prompt
                    AND submission_time > NOW() - INTERVAL '7 days') AS past_week
             FROM submissions
             WHERE submitted_by = $1",
        )
        .bind(account_id)
        .fetch_one(pool)
        .await
    }

    /// The most recent passed submissions across all accounts, each
    /// annotated with the submitter's username and all-time pass count.
    ///
    /// Scores are recounted per row; `limit` bounds the cost.
    pub async fn leaderboard(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        sqlx::query_as::<_, LeaderboardEntry>(
            "SELECT a.username, s.image_path, p.adjective, p.noun,
                    (SELECT COUNT(*) FROM submissions
                     WHERE submitted_by = s.submitted_by AND passes_prompt) AS score,
                    s.submission_time
             FROM submissions s
             JOIN accounts a ON a.id = s.submitted_by
             JOIN prompts p ON p.id = s.prompt_id
             WHERE s.passes_prompt
             ORDER BY s.submission_time DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
