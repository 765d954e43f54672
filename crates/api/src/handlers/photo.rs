//! Handlers for an entry's photo (`/birthdays/{id}/photo`).

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use birthday_core::birthday::ensure_author;
use birthday_core::error::CoreError;
use birthday_core::types::DbId;
use birthday_db::repositories::BirthdayRepo;

use super::birthday::load_birthday;
use crate::error::{AppError, AppResult};
use crate::media::{remove_media_file, store_photo};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Multipart field carrying the image.
const PHOTO_FIELD: &str = "photo";

/// PUT /api/v1/birthdays/{id}/photo
///
/// Author only. Accepts a multipart form with a required `photo` field.
/// Replaces any previous photo.
pub async fn upload(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let existing = load_birthday(&state.pool, id).await?;
    ensure_author(existing.author_id, auth.user_id)?;

    let mut data: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some(PHOTO_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            data = Some(bytes.to_vec());
        }
    }

    let data =
        data.ok_or_else(|| AppError::BadRequest("Missing required 'photo' field".into()))?;

    let media_root = &state.config.media_root;
    let stored = store_photo(media_root, &data).await?;

    // The new file is only referenced once the row points at it.
    let birthday = match BirthdayRepo::set_photo(&state.pool, id, Some(&stored)).await {
        Ok(Some(birthday)) => birthday,
        Ok(None) => {
            remove_media_file(media_root, &stored).await;
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Birthday",
                id,
            }));
        }
        Err(e) => {
            remove_media_file(media_root, &stored).await;
            return Err(e.into());
        }
    };

    if let Some(previous) = existing.photo.as_deref() {
        remove_media_file(media_root, previous).await;
    }

    tracing::info!(
        birthday_id = id,
        user_id = auth.user_id,
        photo = %stored,
        size = data.len(),
        "Birthday photo uploaded"
    );

    Ok(Json(DataResponse { data: birthday }))
}

/// DELETE /api/v1/birthdays/{id}/photo
///
/// Author only. Clearing an entry without a photo is a no-op.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = load_birthday(&state.pool, id).await?;
    ensure_author(existing.author_id, auth.user_id)?;

    let Some(photo) = existing.photo else {
        return Ok(StatusCode::NO_CONTENT);
    };

    BirthdayRepo::set_photo(&state.pool, id, None).await?;
    remove_media_file(&state.config.media_root, &photo).await;

    tracing::info!(birthday_id = id, user_id = auth.user_id, "Birthday photo removed");

    Ok(StatusCode::NO_CONTENT)
}
