use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::tech_stack::application::domain::entities::{
    NewTechStack, TechStack, TechStackPatch,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TechStackRepositoryError {
    #[error("Tech stack not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    /// A stored category outside the known set.
    #[error("Corrupt row: {0}")]
    CorruptRow(String),
}

#[async_trait]
pub trait TechStackRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<TechStack>, TechStackRepositoryError>;

    async fn create(&self, tech: NewTechStack) -> Result<TechStack, TechStackRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        patch: TechStackPatch,
    ) -> Result<TechStack, TechStackRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), TechStackRepositoryError>;

    async fn count(&self) -> Result<u64, TechStackRepositoryError>;

    async fn delete_all(&self) -> Result<u64, TechStackRepositoryError>;

    async fn insert_many(&self, techs: Vec<NewTechStack>) -> Result<u64, TechStackRepositoryError>;
}
