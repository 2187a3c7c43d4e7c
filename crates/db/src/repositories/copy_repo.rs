//! Repository for the `copies` table.

use salescopy_core::types::DbId;
use sqlx::PgPool;

use crate::models::copy::{Copy, NewCopy};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, channel, tone, target, product_name, \
                       product_features, likes, is_published, created_at, updated_at";

/// Provides the create / read / like-count operations for copies.
pub struct CopyRepo;

impl CopyRepo {
    /// Insert a new copy, returning the created row.
    ///
    /// `likes` starts at 0 and both timestamps are set to the current time,
    /// whatever the caller supplied upstream.
    pub async fn create(pool: &PgPool, input: &NewCopy) -> Result<Copy, sqlx::Error> {
        let query = format!(
            "INSERT INTO copies
                (title, description, channel, tone, target, product_name, product_features,
                 likes, is_published, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, 0, $8, NOW(), NOW())
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Copy>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.channel.as_str())
            .bind(input.tone.as_str())
            .bind(&input.target)
            .bind(&input.product_name)
            .bind(&input.product_features)
            .bind(input.is_published)
            .fetch_one(pool)
            .await
    }

    /// Find a copy by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Copy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM copies WHERE id = $1");
        sqlx::query_as::<_, Copy>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List published copies in insertion order.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<Copy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM copies WHERE is_published ORDER BY id ASC");
        sqlx::query_as::<_, Copy>(&query).fetch_all(pool).await
    }

    /// Overwrite the like count. Returns `true` if a row was updated.
    ///
    /// `updated_at` is left as is.
    pub async fn update_likes(pool: &PgPool, id: DbId, likes: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE copies SET likes = $2 WHERE id = $1")
            .bind(id)
            .bind(likes)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
