//! Tag model and DTOs.

use birthday_core::birthday::MAX_TAG_LENGTH;
use birthday_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub tag: String,
    pub created_at: Timestamp,
}

/// A tag joined to the entry it is attached to, used when loading tags for
/// a page of entries in one query.
#[derive(Debug, Clone, FromRow)]
pub struct BirthdayTag {
    pub birthday_id: DbId,
    pub id: DbId,
    pub tag: String,
    pub created_at: Timestamp,
}

impl From<BirthdayTag> for Tag {
    fn from(row: BirthdayTag) -> Self {
        Tag {
            id: row.id,
            tag: row.tag,
            created_at: row.created_at,
        }
    }
}

/// DTO for creating a new tag.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTag {
    #[validate(length(min = 1, max = MAX_TAG_LENGTH, message = "Tag must be 1-20 characters"))]
    pub tag: String,
}
