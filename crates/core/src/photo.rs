//! Photo upload rules.
//!
//! Uploaded photos are identified by content, not by the client-supplied
//! file name, and stored under [`PHOTO_DIR`] inside the media root.

use image::ImageFormat;

use crate::error::CoreError;

/// Media subdirectory holding entry photos.
pub const PHOTO_DIR: &str = "birthdays_images";

/// Formats accepted for entry photos.
pub const ALLOWED_FORMATS: &[ImageFormat] =
    &[ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::WebP];

/// Detect the image format from the file header and return the extension
/// to store it under.
pub fn sniff_photo_extension(bytes: &[u8]) -> Result<&'static str, CoreError> {
    let format = image::guess_format(bytes)
        .map_err(|_| CoreError::Validation("Uploaded file is not a recognized image".into()))?;

    if !ALLOWED_FORMATS.contains(&format) {
        return Err(CoreError::Validation(format!(
            "Unsupported image format {format:?}. Supported: PNG, JPEG, WebP"
        )));
    }

    Ok(format.extensions_str().first().copied().unwrap_or("img"))
}

/// Relative media path for a stored photo.
pub fn photo_relative_path(file_stem: &str, extension: &str) -> String {
    format!("{PHOTO_DIR}/{file_stem}.{extension}")
}
