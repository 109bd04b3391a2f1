use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::{
    Experience, ExperiencePatch, NewExperience,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Experience not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Newest first; this is also the public timeline order.
    async fn list(&self) -> Result<Vec<Experience>, ExperienceRepositoryError>;

    async fn create(&self, exp: NewExperience) -> Result<Experience, ExperienceRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        patch: ExperiencePatch,
    ) -> Result<Experience, ExperienceRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError>;

    async fn count(&self) -> Result<u64, ExperienceRepositoryError>;

    async fn delete_all(&self) -> Result<u64, ExperienceRepositoryError>;

    async fn insert_many(
        &self,
        experiences: Vec<NewExperience>,
    ) -> Result<u64, ExperienceRepositoryError>;
}
