//! Administrative listing of all entries.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use birthday_db::repositories::BirthdayRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/birthdays
///
/// Every entry with its author's username, ordered by ID.
pub async fn list_birthdays(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let rows = BirthdayRepo::list_with_authors(&state.pool).await?;
    Ok(Json(DataResponse { data: rows }))
}
