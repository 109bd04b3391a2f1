use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{
    Project, ProjectChanges, ProjectDraft, ProjectValidationError,
};
use crate::modules::project::application::ports::outgoing::ProjectRepositoryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectError {
    #[error("{0}")]
    Validation(#[from] ProjectValidationError),

    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectRepositoryError> for ProjectError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound => ProjectError::NotFound,
            ProjectRepositoryError::DatabaseError(msg)
            | ProjectRepositoryError::SerializationError(msg) => ProjectError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Ports
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Project>, ProjectError>;
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, draft: ProjectDraft) -> Result<Project, ProjectError>;
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, changes: ProjectChanges) -> Result<Project, ProjectError>;
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ProjectError>;
}
