use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::domain::entities::{NewProject, Project, ProjectPatch};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::shared::patch::PatchField;

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_project)
            .collect()
    }

    async fn create(&self, project: NewProject) -> Result<Project, ProjectRepositoryError> {
        let model = new_active_model(project)?;
        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_project(result)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: ProjectPatch,
    ) -> Result<Project, ProjectRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = patch.title {
            model.title = Set(title);
        }
        if let PatchField::Value(description) = patch.description {
            model.description = Set(description);
        }
        if let PatchField::Value(technologies) = patch.technologies {
            model.technologies = Set(to_json(&technologies)?);
        }
        if let PatchField::Value(highlights) = patch.highlights {
            model.highlights = Set(to_json(&highlights)?);
        }

        set_optional(&mut model.long_description, patch.long_description);
        set_optional(&mut model.role, patch.role);
        set_optional(&mut model.demo_url, patch.demo_url);
        set_optional(&mut model.github_url, patch.github_url);
        set_optional(&mut model.image_url, patch.image_url);

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        model_to_project(result)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, ProjectRepositoryError> {
        Entity::find().count(&*self.db).await.map_err(map_db_err)
    }

    async fn delete_all(&self) -> Result<u64, ProjectRepositoryError> {
        let result = Entity::delete_many()
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }

    async fn insert_many(&self, projects: Vec<NewProject>) -> Result<u64, ProjectRepositoryError> {
        if projects.is_empty() {
            return Ok(0);
        }

        let models = projects
            .into_iter()
            .map(new_active_model)
            .collect::<Result<Vec<_>, _>>()?;

        Entity::insert_many(models)
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn new_active_model(project: NewProject) -> Result<ActiveModel, ProjectRepositoryError> {
    let now = Utc::now().fixed_offset();

    Ok(ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(project.title),
        description: Set(project.description),
        long_description: Set(project.long_description),
        role: Set(project.role),
        technologies: Set(to_json(&project.technologies)?),
        demo_url: Set(project.demo_url),
        github_url: Set(project.github_url),
        image_url: Set(project.image_url),
        highlights: Set(to_json(&project.highlights)?),
        created_at: Set(now),
        updated_at: Set(now),
    })
}

fn set_optional(
    column: &mut sea_orm::ActiveValue<Option<String>>,
    field: PatchField<String>,
) {
    match field {
        PatchField::Unset => {}
        PatchField::Null => *column = Set(None),
        PatchField::Value(v) => *column = Set(Some(v)),
    }
}

fn model_to_project(model: projects::Model) -> Result<Project, ProjectRepositoryError> {
    Ok(Project {
        id: model.id,
        title: model.title,
        description: model.description,
        long_description: model.long_description,
        role: model.role,
        technologies: from_json(&model.technologies)?,
        demo_url: model.demo_url,
        github_url: model.github_url,
        image_url: model.image_url,
        highlights: from_json(&model.highlights)?,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ProjectRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
