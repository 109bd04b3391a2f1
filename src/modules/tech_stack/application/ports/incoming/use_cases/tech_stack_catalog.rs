use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::tech_stack::application::domain::entities::{
    TechStack, TechStackChanges, TechStackValidationError,
};
use crate::modules::tech_stack::application::ports::outgoing::TechStackRepositoryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TechStackError {
    #[error("{0}")]
    Validation(#[from] TechStackValidationError),

    #[error("Tech stack not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TechStackRepositoryError> for TechStackError {
    fn from(err: TechStackRepositoryError) -> Self {
        match err {
            TechStackRepositoryError::NotFound => TechStackError::NotFound,
            TechStackRepositoryError::DatabaseError(msg)
            | TechStackRepositoryError::CorruptRow(msg) => TechStackError::RepositoryError(msg),
        }
    }
}

/// Create input as submitted; category is validated by the service.
#[derive(Debug, Clone, Default)]
pub struct TechStackDraft {
    pub name: String,
    pub category: Option<String>,
}

#[async_trait]
pub trait ListTechStacksUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<TechStack>, TechStackError>;
}

#[async_trait]
pub trait CreateTechStackUseCase: Send + Sync {
    async fn execute(&self, draft: TechStackDraft) -> Result<TechStack, TechStackError>;
}

#[async_trait]
pub trait UpdateTechStackUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, changes: TechStackChanges)
        -> Result<TechStack, TechStackError>;
}

#[async_trait]
pub trait DeleteTechStackUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), TechStackError>;
}
