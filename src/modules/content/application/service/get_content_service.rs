use async_trait::async_trait;
use serde_json::Value;
use tracing::error;

use crate::modules::content::application::ports::incoming::use_cases::{
    GetContentError, GetContentUseCase,
};
use crate::modules::content::application::ports::outgoing::{ContentRepository, StoredContent};
use crate::modules::content::domain::{ContentDocument, ContentNormalizer, CONTENT_SLUG};

pub struct GetContentService<R>
where
    R: ContentRepository,
{
    repository: R,
    normalizer: ContentNormalizer,
}

impl<R> GetContentService<R>
where
    R: ContentRepository,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            normalizer: ContentNormalizer::new(),
        }
    }
}

/// Exposes the store timestamps as top-level keys so they survive
/// normalization as pass-through fields.
fn with_timestamps(stored: StoredContent) -> Value {
    let mut document = stored.document;
    if let Value::Object(map) = &mut document {
        map.insert(
            "createdAt".to_string(),
            Value::String(stored.created_at.to_rfc3339()),
        );
        map.insert(
            "updatedAt".to_string(),
            Value::String(stored.updated_at.to_rfc3339()),
        );
    }
    document
}

#[async_trait]
impl<R> GetContentUseCase for GetContentService<R>
where
    R: ContentRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Option<ContentDocument>, GetContentError> {
        let stored = self.repository.load(CONTENT_SLUG).await.map_err(|e| {
            error!(error = %e, "Failed to load content document");
            GetContentError::RepositoryError(e.to_string())
        })?;

        Ok(stored.map(|s| self.normalizer.normalize(&with_timestamps(s))))
    }
}
