//! Congratulation model and DTOs.

use birthday_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `congratulations` table joined with its author's username.
///
/// Congratulations are never updated; `created_at` is set once on insert.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Congratulation {
    pub id: DbId,
    pub text: String,
    pub birthday_id: DbId,
    pub author_id: DbId,
    pub author_username: String,
    pub created_at: Timestamp,
}

/// DTO for adding a congratulation to an entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCongratulation {
    pub text: String,
}
