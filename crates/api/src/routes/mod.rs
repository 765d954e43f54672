pub mod admin;
pub mod auth;
pub mod birthday;
pub mod health;
pub mod tags;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
///
/// /birthdays                           list (public), create (auth)
/// /birthdays/{id}                      get (public), update, delete (author)
/// /birthdays/{id}/photo                upload, delete (author)
/// /birthdays/{id}/congratulations      list (public), create (auth)
///
/// /tags                                list (public)
///
/// /admin/birthdays                     list with authors (admin)
/// /admin/tags                          create (admin)
/// /admin/tags/{id}                     delete (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/birthdays", birthday::router())
        .nest("/tags", tags::router())
        .nest("/admin", admin::router())
}
