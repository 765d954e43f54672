//! Route definitions for the admin surface. Every handler requires the
//! `admin` role.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{admin, tags};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /birthdays    -> list_birthdays
/// POST   /tags         -> create_tag
/// DELETE /tags/{id}    -> delete_tag
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/birthdays", get(admin::list_birthdays))
        .route("/tags", post(tags::create_tag))
        .route("/tags/{id}", delete(tags::delete_tag))
}
