//! Repository for the `tags` table and tag lookups through `birthday_tags`.

use birthday_core::types::DbId;
use sqlx::PgPool;

use crate::models::tag::{BirthdayTag, CreateTag, Tag};

/// Column list for `tags` queries.
const COLUMNS: &str = "id, tag, created_at";

/// Provides CRUD operations for tags.
pub struct TagRepo;

impl TagRepo {
    /// Insert a new tag. Fails with `uq_tags_tag` when the label exists.
    pub async fn create(pool: &PgPool, input: &CreateTag) -> Result<Tag, sqlx::Error> {
        let query = format!(
            "INSERT INTO tags (tag) VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(input.tag.trim())
            .fetch_one(pool)
            .await
    }

    /// List all tags ordered by label.
    pub async fn list(pool: &PgPool) -> Result<Vec<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags ORDER BY tag ASC");
        sqlx::query_as::<_, Tag>(&query).fetch_all(pool).await
    }

    /// Delete a tag. Its links to entries cascade.
    ///
    /// Returns `true` if a tag was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Tags attached to a single entry, ordered by label.
    pub async fn list_for_birthday(
        pool: &PgPool,
        birthday_id: DbId,
    ) -> Result<Vec<Tag>, sqlx::Error> {
        sqlx::query_as::<_, Tag>(
            "SELECT t.id, t.tag, t.created_at
             FROM tags t
             JOIN birthday_tags bt ON bt.tag_id = t.id
             WHERE bt.birthday_id = $1
             ORDER BY t.tag ASC",
        )
        .bind(birthday_id)
        .fetch_all(pool)
        .await
    }

    /// Tags for several entries at once, ordered by entry then label.
    pub async fn list_for_birthdays(
        pool: &PgPool,
        birthday_ids: &[DbId],
    ) -> Result<Vec<BirthdayTag>, sqlx::Error> {
        if birthday_ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, BirthdayTag>(
            "SELECT bt.birthday_id, t.id, t.tag, t.created_at
             FROM tags t
             JOIN birthday_tags bt ON bt.tag_id = t.id
             WHERE bt.birthday_id = ANY($1)
             ORDER BY bt.birthday_id ASC, t.tag ASC",
        )
        .bind(birthday_ids)
        .fetch_all(pool)
        .await
    }
}
