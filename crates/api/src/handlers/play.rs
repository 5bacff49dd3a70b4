//! Handlers for the `/play` resource: prompt retrieval and photo upload.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use shutterdare_core::upload::{unique_filename, validate_extension};
use shutterdare_core::vocab::pick_prompt_words;
use shutterdare_db::models::prompt::Prompt;
use shutterdare_db::models::submission::{CreateSubmission, Submission};
use shutterdare_db::repositories::{PromptRepo, SubmissionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/play
///
/// Return the active prompt, generating one if none exists yet.
pub async fn get_prompt(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Prompt>> {
    let prompt = active_prompt_or_create(&state).await?;
    Ok(Json(prompt))
}

/// POST /api/v1/play  (multipart: `file`)
///
/// Validate the upload, store the image under a generated filename, and
/// create a pending submission bound to the caller and the active prompt.
/// Any previous pending submission for the caller is superseded.
///
/// If the submission row fails to persist after the file was written, the
/// stored file is deleted (compensating action) and the error propagates.
/// This is the only rollback path; there are no retries.
pub async fn upload(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Submission>)> {
    let prompt = active_prompt_or_create(&state).await?;

    let mut file_data: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "file" {
            let filename = field.file_name().unwrap_or("").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            file_data = Some((filename, data.to_vec()));
        }
        // ignore unknown fields
    }

    let (original_name, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    // Extension check happens before any file or row is written, so a
    // rejected upload leaves no trace.
    let ext = validate_extension(&original_name)?;
    let filename = unique_filename(&ext);

    state.images.save(&filename, &data).await?;

    // Supersede any prior pending submission (the old session-marker
    // semantics: starting a new upload clears the previous pending one).
    SubmissionRepo::clear_pending_for_account(&state.pool, user.account_id).await?;

    let input = CreateSubmission {
        image_path: filename.clone(),
        prompt_id: prompt.id,
        submitted_by: user.account_id,
    };

    match SubmissionRepo::create(&state.pool, &input).await {
        Ok(submission) => {
            tracing::info!(
                submission_id = submission.id,
                account_id = user.account_id,
                prompt_id = prompt.id,
                "Submission created"
            );
            Ok((StatusCode::CREATED, Json(submission)))
        }
        Err(err) => {
            // Compensating action: the row never landed, remove the file.
            if let Err(delete_err) = state.images.delete(&filename).await {
                tracing::warn!(error = %delete_err, %filename, "Rollback file deletion failed");
            }
            Err(err.into())
        }
    }
}

/// Fetch the active prompt, creating one from the vocabularies if the
/// table is empty (first upload ever).
pub(crate) async fn active_prompt_or_create(state: &AppState) -> AppResult<Prompt> {
    if let Some(prompt) = PromptRepo::active(&state.pool).await? {
        return Ok(prompt);
    }

    let (adjective, noun) = pick_prompt_words();
    let prompt = PromptRepo::activate_new(&state.pool, adjective, noun).await?;
    tracing::info!(prompt_id = prompt.id, adjective, noun, "Generated prompt");
    Ok(prompt)
}
