// src/modules/content/application/ports/outgoing/content_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Raw document as persisted, with the store-managed timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredContent {
    pub document: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentSaved {
    pub slug: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn load(&self, slug: &str) -> Result<Option<StoredContent>, ContentRepositoryError>;

    /// Inserts or merges the document under `slug`.
    ///
    /// Server-managed fields in `document` are discarded and `slug` is
    /// written into it. Top-level keys replace the stored ones; keys the
    /// caller did not send are kept. `created_at` is only set on insert.
    async fn upsert(
        &self,
        slug: &str,
        document: Map<String, Value>,
    ) -> Result<ContentSaved, ContentRepositoryError>;
}
