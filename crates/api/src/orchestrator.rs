//! Use-case layer for copies.
//!
//! Composes the [`CopyGenerator`] and [`CopyStore`] seams. Held in
//! [`AppState`](crate::state::AppState) as an `Arc<CopyOrchestrator>`.

use std::sync::Arc;

use salescopy_core::copy::CreateCopyRequest;
use salescopy_core::error::CoreError;
use salescopy_core::generation::CopyGenerator;
use salescopy_core::types::DbId;
use salescopy_db::models::copy::{Copy, NewCopy};
use salescopy_db::store::CopyStore;

use crate::error::{AppError, AppResult};

const ENTITY: &str = "Copy";

pub struct CopyOrchestrator {
    store: Arc<dyn CopyStore>,
    generator: Arc<dyn CopyGenerator>,
}

impl CopyOrchestrator {
    pub fn new(store: Arc<dyn CopyStore>, generator: Arc<dyn CopyGenerator>) -> Self {
        Self { store, generator }
    }

    /// Validate, generate, then persist.
    ///
    /// Generation runs before anything is written, so a failed or unparseable
    /// completion leaves no row behind.
    pub async fn create_copy(&self, request: CreateCopyRequest) -> AppResult<Copy> {
        let input = request.validate()?;

        let generated = self.generator.generate(&input).await?;

        let copy = self
            .store
            .create(&NewCopy::from_generated(input, generated))
            .await?;

        tracing::info!(copy_id = copy.id, channel = %copy.channel, tone = %copy.tone, "Copy created");
        Ok(copy)
    }

    pub async fn get_copy(&self, id: DbId) -> AppResult<Copy> {
        self.store.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    pub async fn get_published_copies(&self) -> AppResult<Vec<Copy>> {
        Ok(self.store.list_published().await?)
    }

    /// Increment the like count by one and return the updated copy.
    ///
    /// This is a read-then-write: two concurrent calls on the same id can
    /// both read `n` and both write `n + 1`.
    pub async fn update_likes(&self, id: DbId) -> AppResult<Copy> {
        let mut copy = self.get_copy(id).await?;

        let likes = copy.likes.checked_add(1).ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "like count overflow on copy {id}"
            )))
        })?;

        if !self.store.update_likes(id, likes).await? {
            // Row vanished between the read and the write.
            return Err(not_found(id));
        }

        copy.likes = likes;
        tracing::info!(copy_id = id, likes, "Copy liked");
        Ok(copy)
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}
