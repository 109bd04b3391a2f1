use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{
    NewProject, Project, ProjectChanges, ProjectDraft, ProjectPatch,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, ListProjectsUseCase, ProjectError,
    UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectRepository;

pub struct ProjectCatalogService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> ProjectCatalogService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListProjectsUseCase for ProjectCatalogService<R>
where
    R: ProjectRepository,
{
    async fn execute(&self) -> Result<Vec<Project>, ProjectError> {
        Ok(self.repository.list().await?)
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for ProjectCatalogService<R>
where
    R: ProjectRepository,
{
    async fn execute(&self, draft: ProjectDraft) -> Result<Project, ProjectError> {
        let project = NewProject::new(draft)?;
        let created = self.repository.create(project).await?;

        info!(project_id = %created.id, "Project created");
        Ok(created)
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for ProjectCatalogService<R>
where
    R: ProjectRepository,
{
    async fn execute(&self, id: Uuid, changes: ProjectChanges) -> Result<Project, ProjectError> {
        let patch = ProjectPatch::new(changes)?;

        self.repository.update(id, patch).await.map_err(|e| {
            warn!(project_id = %id, error = %e, "Project update failed");
            e.into()
        })
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for ProjectCatalogService<R>
where
    R: ProjectRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), ProjectError> {
        self.repository.delete(id).await?;

        info!(project_id = %id, "Project deleted");
        Ok(())
    }
}
