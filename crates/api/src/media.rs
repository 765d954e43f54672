//! Local media storage for entry photos.
//!
//! Files live under `ServerConfig::media_root` and are addressed in the
//! database by their path relative to it.

use std::path::Path;

use birthday_core::photo::{photo_relative_path, sniff_photo_extension, PHOTO_DIR};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Validate and store uploaded photo bytes. Returns the relative media path.
pub async fn store_photo(media_root: &Path, bytes: &[u8]) -> AppResult<String> {
    let extension = sniff_photo_extension(bytes)?;

    tokio::fs::create_dir_all(media_root.join(PHOTO_DIR))
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create media directory: {e}")))?;

    let relative = photo_relative_path(&Uuid::new_v4().simple().to_string(), extension);
    tokio::fs::write(media_root.join(&relative), bytes)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to write photo: {e}")))?;

    Ok(relative)
}

/// Remove a stored media file. Failures are logged, not returned: the
/// database row is the source of truth and an orphaned file is harmless.
pub async fn remove_media_file(media_root: &Path, relative: &str) {
    match tokio::fs::remove_file(media_root.join(relative)).await {
        Ok(()) => tracing::debug!(path = %relative, "Removed media file"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(path = %relative, error = %e, "Failed to remove media file"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    #[tokio::test]
    async fn stores_under_photo_dir_and_removes() {
        let dir = tempfile::tempdir().unwrap();
        let relative = store_photo(dir.path(), PNG_HEADER).await.unwrap();

        assert!(relative.starts_with("birthdays_images/"));
        assert!(relative.ends_with(".png"));
        let stored = tokio::fs::read(dir.path().join(&relative)).await.unwrap();
        assert_eq!(stored, PNG_HEADER);

        remove_media_file(dir.path(), &relative).await;
        assert!(!dir.path().join(&relative).exists());

        // Removing twice is a no-op.
        remove_media_file(dir.path(), &relative).await;
    }

    #[tokio::test]
    async fn rejects_non_image_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_photo(dir.path(), b"plain text").await.is_err());
        assert!(!dir.path().join(PHOTO_DIR).exists());
    }
}
