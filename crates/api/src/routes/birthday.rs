//! Route definitions for the `/birthdays` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{birthday, congratulation, photo};
use crate::state::AppState;

/// Routes mounted at `/birthdays`.
///
/// ```text
/// GET    /                       -> list (?page=N)
/// POST   /                       -> create (requires auth)
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update (author only)
/// DELETE /{id}                   -> delete (author only)
/// PUT    /{id}/photo             -> photo::upload (author only)
/// DELETE /{id}/photo             -> photo::delete (author only)
/// GET    /{id}/congratulations   -> congratulation::list
/// POST   /{id}/congratulations   -> congratulation::create (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(birthday::list).post(birthday::create))
        .route(
            "/{id}",
            get(birthday::get_by_id)
                .put(birthday::update)
                .delete(birthday::delete),
        )
        .route("/{id}/photo", put(photo::upload).delete(photo::delete))
        .route(
            "/{id}/congratulations",
            get(congratulation::list).post(congratulation::create),
        )
}
