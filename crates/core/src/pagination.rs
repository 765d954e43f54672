//! Page-number pagination for the birthday list.
//!
//! Pages are 1-based. An empty collection still has one (empty) page; any
//! other page outside `1..=total_pages` does not exist.

use serde::Serialize;

use crate::error::CoreError;

/// Entries shown per list page.
pub const PER_PAGE: i64 = 10;

/// A resolved page: where to start reading and how the page relates to the
/// whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PageWindow {
    /// Row offset of the first entry on this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Number of pages needed for `total` rows. Never less than one.
pub fn total_pages(total: i64, per_page: i64) -> i64 {
    if total <= 0 {
        1
    } else {
        (total + per_page - 1) / per_page
    }
}

/// Resolve a requested page number (default `1`) against a row count.
pub fn resolve_page(
    requested: Option<i64>,
    total: i64,
    per_page: i64,
) -> Result<PageWindow, CoreError> {
    let page = requested.unwrap_or(1);
    let total_pages = total_pages(total, per_page);
    if page < 1 || page > total_pages {
        return Err(CoreError::NotFound { entity: "Page", id: page });
    }
    Ok(PageWindow {
        page,
        per_page,
        total,
        total_pages,
    })
}
