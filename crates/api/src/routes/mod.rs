pub mod auth;
pub mod game;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register      register (public)
/// /auth/login         login (public)
/// /auth/refresh       refresh (public)
/// /auth/logout        logout (requires auth)
///
/// /play               GET: active prompt; POST: upload photo (multipart)
/// /submission         GET: pending submission, 404 if none
/// /feedback           GET: evaluate pending submission, clear pending
/// /history            GET: caller's history + pass counters
/// /players            GET: global leaderboard (top 15 recent passes)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login, refresh, logout).
        .nest("/auth", auth::router())
        // Game routes (play, submission, feedback, history, players).
        .merge(game::router())
}
