use std::sync::Arc;

use shutterdare_vision::LabelSource;

use crate::config::ServerConfig;
use crate::storage::ImageStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: shutterdare_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Evaluation oracle (label detection). Trait object so tests can
    /// substitute a stub for the external service.
    pub vision: Arc<dyn LabelSource>,
    /// Local image storage for submission uploads.
    pub images: Arc<ImageStore>,
}
