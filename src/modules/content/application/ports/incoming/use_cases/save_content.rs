use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

use crate::modules::content::domain::ContentDocument;

#[derive(Debug, Clone)]
pub enum SaveContentError {
    InvalidBody,
    RepositoryError(String),
}

impl fmt::Display for SaveContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveContentError::InvalidBody => write!(f, "content body must be a JSON object"),
            SaveContentError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait SaveContentUseCase: Send + Sync {
    async fn execute(&self, raw: Value) -> Result<ContentDocument, SaveContentError>;
}
