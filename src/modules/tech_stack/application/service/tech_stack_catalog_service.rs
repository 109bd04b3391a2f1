use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::tech_stack::application::domain::entities::{
    NewTechStack, TechStack, TechStackChanges, TechStackPatch,
};
use crate::modules::tech_stack::application::ports::incoming::use_cases::{
    CreateTechStackUseCase, DeleteTechStackUseCase, ListTechStacksUseCase, TechStackDraft,
    TechStackError, UpdateTechStackUseCase,
};
use crate::modules::tech_stack::application::ports::outgoing::TechStackRepository;

pub struct TechStackCatalogService<R>
where
    R: TechStackRepository,
{
    repository: R,
}

impl<R> TechStackCatalogService<R>
where
    R: TechStackRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListTechStacksUseCase for TechStackCatalogService<R>
where
    R: TechStackRepository,
{
    async fn execute(&self) -> Result<Vec<TechStack>, TechStackError> {
        Ok(self.repository.list().await?)
    }
}

#[async_trait]
impl<R> CreateTechStackUseCase for TechStackCatalogService<R>
where
    R: TechStackRepository,
{
    async fn execute(&self, draft: TechStackDraft) -> Result<TechStack, TechStackError> {
        let tech = NewTechStack::new(&draft.name, draft.category.as_deref())?;
        let created = self.repository.create(tech).await?;

        info!(tech_id = %created.id, category = %created.category, "Tech stack entry created");
        Ok(created)
    }
}

#[async_trait]
impl<R> UpdateTechStackUseCase for TechStackCatalogService<R>
where
    R: TechStackRepository,
{
    async fn execute(
        &self,
        id: Uuid,
        changes: TechStackChanges,
    ) -> Result<TechStack, TechStackError> {
        let patch = TechStackPatch::new(changes)?;
        Ok(self.repository.update(id, patch).await?)
    }
}

#[async_trait]
impl<R> DeleteTechStackUseCase for TechStackCatalogService<R>
where
    R: TechStackRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), TechStackError> {
        self.repository.delete(id).await?;

        info!(tech_id = %id, "Tech stack entry deleted");
        Ok(())
    }
}
