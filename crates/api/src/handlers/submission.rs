//! Handlers for the pending submission view and its evaluation feedback.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use shutterdare_core::error::CoreError;
use shutterdare_core::vocab::pick_prompt_words;
use shutterdare_db::models::prompt::Prompt;
use shutterdare_db::models::submission::Submission;
use shutterdare_db::repositories::{PromptRepo, SubmissionRepo};
use shutterdare_vision::match_prompt;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// The caller's pending submission together with its prompt.
#[derive(Debug, Serialize)]
pub struct PendingSubmissionResponse {
    pub submission: Submission,
    pub prompt: Prompt,
}

/// Evaluation outcome for a submission.
#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    /// Whether the detected labels matched the prompt's adjective.
    pub adjective_matched: bool,
    /// Whether the detected labels matched the prompt's noun.
    pub noun_matched: bool,
    /// True when both words matched and the submission passed.
    pub passed: bool,
    /// The prompt the submission was evaluated against.
    pub prompt: Prompt,
}

/// GET /api/v1/submission
///
/// Show the caller's pending submission (image + prompt), or 404 if none
/// is pending.
pub async fn pending(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<PendingSubmissionResponse>> {
    let submission = find_pending(&state, &user).await?;
    let prompt = prompt_for(&state, &submission).await?;

    Ok(Json(PendingSubmissionResponse { submission, prompt }))
}

/// GET /api/v1/feedback
///
/// Evaluate the caller's pending submission against its prompt via the
/// vision oracle. On a full match the submission passes and a new prompt
/// is activated. The pending marker is cleared regardless of outcome, so
/// feedback is viewable at most once; a second request yields 404.
///
/// Oracle and storage failures propagate as errors with the pending state
/// intact -- no retry, no fallback.
pub async fn feedback(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<FeedbackResponse>> {
    let submission = find_pending(&state, &user).await?;
    let prompt = prompt_for(&state, &submission).await?;

    let image = state.images.read(&submission.image_path).await?;
    let labels = state.vision.detect_labels(&image).await?;

    let (adjective_matched, noun_matched) = match_prompt(&labels, &prompt.adjective, &prompt.noun);
    let passed = adjective_matched && noun_matched;

    if passed {
        SubmissionRepo::mark_passed(&state.pool, submission.id).await?;

        // The prompt is exhausted: activate a fresh one.
        let (adjective, noun) = pick_prompt_words();
        let next = PromptRepo::activate_new(&state.pool, adjective, noun).await?;
        tracing::info!(
            submission_id = submission.id,
            next_prompt_id = next.id,
            "Submission passed, new prompt activated"
        );
    }

    SubmissionRepo::mark_feedback_viewed(&state.pool, submission.id).await?;

    Ok(Json(FeedbackResponse {
        adjective_matched,
        noun_matched,
        passed,
        prompt,
    }))
}

/// Load the caller's pending submission, or 404.
async fn find_pending(state: &AppState, user: &AuthUser) -> AppResult<Submission> {
    SubmissionRepo::find_pending_for_account(&state.pool, user.account_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Pending submission for account",
            id: user.account_id,
        }))
}

/// Load the prompt a submission was created for.
async fn prompt_for(state: &AppState, submission: &Submission) -> AppResult<Prompt> {
    PromptRepo::find_by_id(&state.pool, submission.prompt_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id: submission.prompt_id,
        }))
}
