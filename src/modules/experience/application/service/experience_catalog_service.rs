use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::{
    Experience, ExperienceChanges, ExperienceDraft, ExperiencePatch, NewExperience,
};
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, ExperienceError, ListExperiencesUseCase,
    UpdateExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::ExperienceRepository;

pub struct ExperienceCatalogService<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> ExperienceCatalogService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListExperiencesUseCase for ExperienceCatalogService<R>
where
    R: ExperienceRepository,
{
    async fn execute(&self) -> Result<Vec<Experience>, ExperienceError> {
        Ok(self.repository.list().await?)
    }
}

#[async_trait]
impl<R> CreateExperienceUseCase for ExperienceCatalogService<R>
where
    R: ExperienceRepository,
{
    async fn execute(&self, draft: ExperienceDraft) -> Result<Experience, ExperienceError> {
        let experience = NewExperience::new(draft)?;
        let created = self.repository.create(experience).await?;

        info!(experience_id = %created.id, kind = created.kind.as_str(), "Experience created");
        Ok(created)
    }
}

#[async_trait]
impl<R> UpdateExperienceUseCase for ExperienceCatalogService<R>
where
    R: ExperienceRepository,
{
    async fn execute(
        &self,
        id: Uuid,
        changes: ExperienceChanges,
    ) -> Result<Experience, ExperienceError> {
        let patch = ExperiencePatch::new(changes)?;
        Ok(self.repository.update(id, patch).await?)
    }
}

#[async_trait]
impl<R> DeleteExperienceUseCase for ExperienceCatalogService<R>
where
    R: ExperienceRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), ExperienceError> {
        self.repository.delete(id).await?;

        info!(experience_id = %id, "Experience deleted");
        Ok(())
    }
}
