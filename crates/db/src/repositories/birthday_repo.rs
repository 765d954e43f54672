//! Repository for the `birthdays` and `birthday_tags` tables.

use birthday_core::birthday::normalize_last_name;
use birthday_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::birthday::{Birthday, BirthdayAdminRow, CreateBirthday, UpdateBirthday};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, first_name, last_name, birthday, photo, author_id, created_at, updated_at";

/// Provides CRUD operations for birthday entries.
pub struct BirthdayRepo;

impl BirthdayRepo {
    /// Insert a new entry and attach its tags in one transaction.
    ///
    /// Fails with a `uq_birthdays_person` violation when the same person
    /// (first name, last name, birth date) is already recorded.
    pub async fn create(
        pool: &PgPool,
        author_id: Option<DbId>,
        input: &CreateBirthday,
    ) -> Result<Birthday, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO birthdays (first_name, last_name, birthday, author_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let birthday = sqlx::query_as::<_, Birthday>(&query)
            .bind(input.first_name.trim())
            .bind(normalize_last_name(input.last_name.as_deref()))
            .bind(input.birthday)
            .bind(author_id)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(tag_ids) = &input.tag_ids {
            Self::replace_tags(&mut tx, birthday.id, tag_ids).await?;
        }

        tx.commit().await?;
        Ok(birthday)
    }

    /// Find an entry by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Birthday>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM birthdays WHERE id = $1");
        sqlx::query_as::<_, Birthday>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of entries.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM birthdays")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// One page of entries ordered by ID ascending.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Birthday>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM birthdays
             ORDER BY id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Birthday>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// All entries with their author's username, for the admin listing.
    pub async fn list_with_authors(pool: &PgPool) -> Result<Vec<BirthdayAdminRow>, sqlx::Error> {
        sqlx::query_as::<_, BirthdayAdminRow>(
            "SELECT b.id, b.first_name, b.last_name, b.birthday, u.username AS author
             FROM birthdays b
             LEFT JOIN users u ON u.id = b.author_id
             ORDER BY b.id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Update an entry. Only non-`None` fields in `input` are applied;
    /// `tag_ids`, when present, replaces the full tag set.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBirthday,
    ) -> Result<Option<Birthday>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE birthdays SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                birthday = COALESCE($4, birthday)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let birthday = sqlx::query_as::<_, Birthday>(&query)
            .bind(id)
            .bind(input.first_name.as_deref().map(str::trim))
            .bind(
                input
                    .last_name
                    .as_deref()
                    .map(|name| normalize_last_name(Some(name))),
            )
            .bind(input.birthday)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(birthday) = birthday else {
            return Ok(None);
        };

        if let Some(tag_ids) = &input.tag_ids {
            Self::replace_tags(&mut tx, id, tag_ids).await?;
        }

        tx.commit().await?;
        Ok(Some(birthday))
    }

    /// Set or clear the photo path. Returns the updated row, or `None` if
    /// the entry does not exist.
    pub async fn set_photo(
        pool: &PgPool,
        id: DbId,
        photo: Option<&str>,
    ) -> Result<Option<Birthday>, sqlx::Error> {
        let query = format!(
            "UPDATE birthdays SET photo = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Birthday>(&query)
            .bind(id)
            .bind(photo)
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry. Tag links and congratulations cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM birthdays WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace the tag set of an entry inside an open transaction.
    ///
    /// Unknown tag ids fail with an `fk_birthday_tags_tag_id` violation.
    async fn replace_tags(
        tx: &mut Transaction<'_, Postgres>,
        birthday_id: DbId,
        tag_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM birthday_tags WHERE birthday_id = $1")
            .bind(birthday_id)
            .execute(&mut **tx)
            .await?;

        if tag_ids.is_empty() {
            return Ok(());
        }

        let result = sqlx::query(
            "INSERT INTO birthday_tags (birthday_id, tag_id)
             SELECT $1, UNNEST($2::BIGINT[])
             ON CONFLICT DO NOTHING",
        )
        .bind(birthday_id)
        .bind(tag_ids)
        .execute(&mut **tx)
        .await?;

        tracing::debug!(
            birthday_id,
            linked = result.rows_affected(),
            "Replaced birthday tags"
        );
        Ok(())
    }
}
