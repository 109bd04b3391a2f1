use async_trait::async_trait;

use crate::modules::content::domain::ContentDocument;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetContentError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetContentUseCase: Send + Sync {
    /// `None` means the site has not been seeded or saved yet.
    async fn execute(&self) -> Result<Option<ContentDocument>, GetContentError>;
}
