use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, info};

use crate::modules::content::application::ports::incoming::use_cases::{
    SaveContentError, SaveContentUseCase,
};
use crate::modules::content::application::ports::outgoing::ContentRepository;
use crate::modules::content::domain::document::strip_server_fields;
use crate::modules::content::domain::{ContentDocument, ContentNormalizer, CONTENT_SLUG};

pub struct SaveContentService<R>
where
    R: ContentRepository,
{
    repository: R,
    normalizer: ContentNormalizer,
}

impl<R> SaveContentService<R>
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

#[async_trait]
impl<R> SaveContentUseCase for SaveContentService<R>
where
    R: ContentRepository + Send + Sync,
{
    async fn execute(&self, raw: Value) -> Result<ContentDocument, SaveContentError> {
        let mut fields = match raw {
            Value::Object(map) => map,
            _ => return Err(SaveContentError::InvalidBody),
        };
        strip_server_fields(&mut fields);

        let document = self.normalizer.normalize(&Value::Object(fields));
        let storable = document
            .to_storable()
            .map_err(|e| SaveContentError::RepositoryError(e.to_string()))?;

        let saved = self
            .repository
            .upsert(CONTENT_SLUG, storable)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to save content document");
                SaveContentError::RepositoryError(e.to_string())
            })?;

        info!(slug = %saved.slug, updated_at = %saved.updated_at, "Content document saved");
        Ok(document)
    }
}
