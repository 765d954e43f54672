//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Use [`DataResponse`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })` to get
//! compile-time type safety and consistent serialization.

use birthday_core::pagination::PageWindow;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Paginated envelope: `{ "data": [...], "page", "per_page", "total",
/// "total_pages", "has_next", "has_previous" }`.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub data: Vec<T>,
    #[serde(flatten)]
    pub page: PageWindow,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T: Serialize> PageResponse<T> {
    pub fn new(data: Vec<T>, page: PageWindow) -> Self {
        Self {
            data,
            has_next: page.has_next(),
            has_previous: page.has_previous(),
            page,
        }
    }
}
