//! Object-safe storage seam over [`CopyRepo`].
//!
//! The API layer holds an `Arc<dyn CopyStore>` so that tests can swap the
//! Postgres implementation for an in-memory one.

use async_trait::async_trait;
use salescopy_core::types::DbId;

use crate::models::copy::{Copy, NewCopy};
use crate::repositories::CopyRepo;
use crate::DbPool;

#[async_trait]
pub trait CopyStore: Send + Sync {
    /// Insert a copy with `likes = 0` and fresh timestamps.
    async fn create(&self, input: &NewCopy) -> Result<Copy, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Copy>, sqlx::Error>;

    /// Published copies only; empty when none match.
    async fn list_published(&self) -> Result<Vec<Copy>, sqlx::Error>;

    /// Set the like count to `likes`. `false` means no row matched `id`.
    async fn update_likes(&self, id: DbId, likes: i32) -> Result<bool, sqlx::Error>;

    /// Check the backing store is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// [`CopyStore`] backed by a Postgres pool.
#[derive(Clone)]
pub struct PgCopyStore {
    pool: DbPool,
}

impl PgCopyStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CopyStore for PgCopyStore {
    async fn create(&self, input: &NewCopy) -> Result<Copy, sqlx::Error> {
        CopyRepo::create(&self.pool, input).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Copy>, sqlx::Error> {
        CopyRepo::find_by_id(&self.pool, id).await
    }

    async fn list_published(&self) -> Result<Vec<Copy>, sqlx::Error> {
        CopyRepo::list_published(&self.pool).await
    }

    async fn update_likes(&self, id: DbId, likes: i32) -> Result<bool, sqlx::Error> {
        CopyRepo::update_likes(&self.pool, id, likes).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
