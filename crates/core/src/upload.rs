//! Upload filename validation and generation.
//!
//! A submission photo is accepted only when its original filename carries
//! one of the allowed image extensions. Accepted files are stored under a
//! freshly generated uuid4 name (original extension preserved) so that
//! concurrent uploads cannot collide on disk.

use uuid::Uuid;

use crate::error::CoreError;

/// Extensions accepted for submission photos.
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// User-facing rejection message for disallowed file types.
pub const BAD_EXTENSION_MESSAGE: &str = "File must be a .png or a .jpg/.jpeg";

/// Validate an uploaded filename's extension.
///
/// Returns the lowercased extension (without the dot) on success, or a
/// [`CoreError::Validation`] carrying [`BAD_EXTENSION_MESSAGE`] otherwise.
/// A filename without any dot is rejected the same way.
pub fn validate_extension(filename: &str) -> Result<String, CoreError> {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, e)| e.to_lowercase())
        .unwrap_or_default();

    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(CoreError::Validation(BAD_EXTENSION_MESSAGE.to_string()))
    }
}

/// Generate a collision-resistant stored filename for an accepted upload.
pub fn unique_filename(ext: &str) -> String {
    format!("{}.{ext}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_and_jpeg_accepted() {
        assert_eq!(validate_extension("photo.png").unwrap(), "png");
        assert_eq!(validate_extension("photo.jpg").unwrap(), "jpg");
        assert_eq!(validate_extension("photo.jpeg").unwrap(), "jpeg");
    }

    #[test]
    fn test_uppercase_extension_accepted() {
        assert_eq!(validate_extension("HOLIDAY.PNG").unwrap(), "png");
    }

    #[test]
    fn test_gif_rejected_with_exact_message() {
        let err = validate_extension("photo.gif").unwrap_err();
        match err {
            CoreError::Validation(msg) => assert_eq!(msg, BAD_EXTENSION_MESSAGE),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_extension_rejected() {
        assert!(validate_extension("photo").is_err());
        assert!(validate_extension("").is_err());
    }

    #[test]
    fn test_unique_filename_preserves_extension() {
        let name = unique_filename("jpeg");
        assert!(name.ends_with(".jpeg"));

        // Two calls must never produce the same name.
        assert_ne!(name, unique_filename("jpeg"));
    }
}
