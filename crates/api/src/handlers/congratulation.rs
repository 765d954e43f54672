//! Handlers for congratulations nested under `/birthdays/{id}`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use birthday_core::congratulation::validate_text;
use birthday_core::error::CoreError;
use birthday_core::types::DbId;
use birthday_db::models::congratulation::CreateCongratulation;
use birthday_db::repositories::CongratulationRepo;

use super::birthday::load_birthday;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/birthdays/{id}/congratulations
pub async fn list(
    State(state): State<AppState>,
    Path(birthday_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    load_birthday(&state.pool, birthday_id).await?;
    let congratulations = CongratulationRepo::list_for_birthday(&state.pool, birthday_id).await?;
    Ok(Json(DataResponse {
        data: congratulations,
    }))
}

/// POST /api/v1/birthdays/{id}/congratulations
///
/// Any authenticated user may congratulate.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(birthday_id): Path<DbId>,
    Json(input): Json<CreateCongratulation>,
) -> AppResult<impl IntoResponse> {
    let text = input.text.trim();
    validate_text(text).map_err(CoreError::Validation)?;
    load_birthday(&state.pool, birthday_id).await?;

    let congratulation =
        CongratulationRepo::create(&state.pool, birthday_id, auth.user_id, text).await?;

    tracing::info!(
        congratulation_id = congratulation.id,
        birthday_id,
        user_id = auth.user_id,
        "Congratulation added"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: congratulation,
        }),
    ))
}
