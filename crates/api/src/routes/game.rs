//! Route definitions for the game flow (all require auth via `AuthUser`).

use axum::routing::get;
use axum::Router;

use crate::handlers::{history, play, submission};
use crate::state::AppState;

/// Game routes mounted directly under `/api/v1`.
///
/// ```text
/// GET  /play        -> active prompt (created if absent)
/// POST /play        -> upload photo (multipart), create submission
/// GET  /submission  -> pending submission view
/// GET  /feedback    -> evaluate pending submission
/// GET  /history     -> caller's history + counters
/// GET  /players     -> global leaderboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/play", get(play::get_prompt).post(play::upload))
        .route("/submission", get(submission::pending))
        .route("/feedback", get(submission::feedback))
        .route("/history", get(history::history))
        .route("/players", get(history::players))
}
