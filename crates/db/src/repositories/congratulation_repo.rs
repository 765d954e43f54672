//! Repository for the `congratulations` table.
//!
//! Congratulations are append-only: there is no update, and rows are only
//! removed by cascade when their entry is deleted.

use birthday_core::types::DbId;
use sqlx::PgPool;

use crate::models::congratulation::Congratulation;

/// Provides create and list operations for congratulations.
pub struct CongratulationRepo;

impl CongratulationRepo {
    /// Insert a congratulation, returning it with the author's username.
    pub async fn create(
        pool: &PgPool,
        birthday_id: DbId,
        author_id: DbId,
        text: &str,
    ) -> Result<Congratulation, sqlx::Error> {
        sqlx::query_as::<_, Congratulation>(
            "WITH inserted AS (
                 INSERT INTO congratulations (text, birthday_id, author_id)
                 VALUES ($1, $2, $3)
                 RETURNING id, text, birthday_id, author_id, created_at
             )
             SELECT i.id, i.text, i.birthday_id, i.author_id,
                    u.username AS author_username, i.created_at
             FROM inserted i
             JOIN users u ON u.id = i.author_id",
        )
        .bind(text)
        .bind(birthday_id)
        .bind(author_id)
        .fetch_one(pool)
        .await
    }

    /// All congratulations for an entry, oldest first.
    pub async fn list_for_birthday(
        pool: &PgPool,
        birthday_id: DbId,
    ) -> Result<Vec<Congratulation>, sqlx::Error> {
        sqlx::query_as::<_, Congratulation>(
            "SELECT c.id, c.text, c.birthday_id, c.author_id,
                    u.username AS author_username, c.created_at
             FROM congratulations c
             JOIN users u ON u.id = c.author_id
             WHERE c.birthday_id = $1
             ORDER BY c.created_at ASC, c.id ASC",
        )
        .bind(birthday_id)
        .fetch_all(pool)
        .await
    }

    /// Number of congratulations for an entry.
    pub async fn count_for_birthday(pool: &PgPool, birthday_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM congratulations WHERE birthday_id = $1")
                .bind(birthday_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
