//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Page-number pagination (`?page=`), 1-based.
///
/// Resolved against the row count by `birthday_core::pagination::resolve_page`.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}
