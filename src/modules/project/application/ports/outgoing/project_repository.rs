use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{NewProject, Project, ProjectPatch};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError>;

    async fn create(&self, project: NewProject) -> Result<Project, ProjectRepositoryError>;

    async fn update(&self, id: Uuid, patch: ProjectPatch)
        -> Result<Project, ProjectRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError>;

    async fn count(&self) -> Result<u64, ProjectRepositoryError>;

    async fn delete_all(&self) -> Result<u64, ProjectRepositoryError>;

    async fn insert_many(&self, projects: Vec<NewProject>) -> Result<u64, ProjectRepositoryError>;
}
