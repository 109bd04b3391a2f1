use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::{
    Experience, ExperienceChanges, ExperienceDraft, ExperienceValidationError,
};
use crate::modules::experience::application::ports::outgoing::ExperienceRepositoryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExperienceError {
    #[error("{0}")]
    Validation(#[from] ExperienceValidationError),

    #[error("Experience not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ExperienceRepositoryError> for ExperienceError {
    fn from(err: ExperienceRepositoryError) -> Self {
        match err {
            ExperienceRepositoryError::NotFound => ExperienceError::NotFound,
            ExperienceRepositoryError::DatabaseError(msg)
            | ExperienceRepositoryError::SerializationError(msg) => {
                ExperienceError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
pub trait ListExperiencesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Experience>, ExperienceError>;
}

#[async_trait]
pub trait CreateExperienceUseCase: Send + Sync {
    async fn execute(&self, draft: ExperienceDraft) -> Result<Experience, ExperienceError>;
}

#[async_trait]
pub trait UpdateExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        changes: ExperienceChanges,
    ) -> Result<Experience, ExperienceError>;
}

#[async_trait]
pub trait DeleteExperienceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ExperienceError>;
}
