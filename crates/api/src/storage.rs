//! Local-disk storage for submission images.
//!
//! Files live flat under the configured upload directory, addressed by
//! their generated uuid4 filename. Deletion exists only for the
//! compensating rollback when a submission row fails to persist.

use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Filesystem store rooted at the configured upload directory.
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Root directory that stored filenames resolve against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write an image under `filename`, creating the root directory if needed.
    pub async fn save(&self, filename: &str, data: &[u8]) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;

        tokio::fs::write(self.root.join(filename), data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to store image: {e}")))?;
        Ok(())
    }

    /// Read a stored image back (for evaluation).
    pub async fn read(&self, filename: &str) -> AppResult<Vec<u8>> {
        tokio::fs::read(self.root.join(filename))
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to read image: {e}")))
    }

    /// Delete a stored image. Used as the compensating action when the
    /// submission row fails to persist after the file was written.
    pub async fn delete(&self, filename: &str) -> AppResult<()> {
        tokio::fs::remove_file(self.root.join(filename))
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to delete image: {e}")))
    }
}
