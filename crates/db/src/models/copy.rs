//! Copy entity model and insert DTO.

use salescopy_core::copy::{Channel, CreateCopyInput, Tone};
use salescopy_core::generation::GeneratedCopy;
use salescopy_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `copies` table.
///
/// Serialized with camelCase keys, which is the public JSON shape.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Copy {
    pub id: DbId,
    pub title: String,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub channel: Channel,
    #[sqlx(try_from = "String")]
    pub tone: Tone,
    pub target: String,
    pub product_name: String,
    pub product_features: String,
    pub likes: i32,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a copy. `likes` and timestamps are always assigned by
/// the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCopy {
    pub title: String,
    pub description: String,
    pub channel: Channel,
    pub tone: Tone,
    pub target: String,
    pub product_name: String,
    pub product_features: String,
    pub is_published: bool,
}

impl NewCopy {
    /// Combine validated input with a generation result.
    pub fn from_generated(input: CreateCopyInput, generated: GeneratedCopy) -> Self {
        Self {
            title: generated.title,
            description: generated.description,
            channel: input.channel,
            tone: input.tone,
            target: input.target,
            product_name: input.product_name,
            product_features: input.product_features,
            is_published: input.is_published,
        }
    }
}
