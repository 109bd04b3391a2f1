use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::adapter::outgoing::sea_orm_entity::experiences::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::experience::application::domain::entities::{
    Experience, ExperiencePatch, NewExperience,
};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};
use crate::shared::patch::PatchField;

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Experience>, ExperienceRepositoryError> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_experience)
            .collect()
    }

    async fn create(&self, exp: NewExperience) -> Result<Experience, ExperienceRepositoryError> {
        let result = new_active_model(exp)?
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;

        model_to_experience(result)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: ExperiencePatch,
    ) -> Result<Experience, ExperienceRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(kind) = patch.kind {
            model.experience_type = Set(kind.as_str().to_string());
        }
        if let PatchField::Value(title) = patch.title {
            model.title = Set(title);
        }
        if let PatchField::Value(org) = patch.org {
            model.org = Set(org);
        }
        if let PatchField::Value(period) = patch.period {
            model.period = Set(period);
        }
        if let PatchField::Value(summary) = patch.summary {
            model.summary = Set(summary);
        }
        if let PatchField::Value(highlights) = patch.highlights {
            model.highlights = Set(to_json(&highlights)?);
        }
        if let PatchField::Value(tags) = patch.tags {
            model.tags = Set(to_json(&tags)?);
        }
        if let PatchField::Value(links) = patch.links {
            model.links = Set(to_json(&links)?);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let result = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(ExperienceRepositoryError::NotFound)?;

        model_to_experience(result)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ExperienceRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, ExperienceRepositoryError> {
        Entity::find().count(&*self.db).await.map_err(map_db_err)
    }

    async fn delete_all(&self) -> Result<u64, ExperienceRepositoryError> {
        Ok(Entity::delete_many()
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?
            .rows_affected)
    }

    async fn insert_many(
        &self,
        experiences: Vec<NewExperience>,
    ) -> Result<u64, ExperienceRepositoryError> {
        if experiences.is_empty() {
            return Ok(0);
        }

        let models = experiences
            .into_iter()
            .map(new_active_model)
            .collect::<Result<Vec<_>, _>>()?;

        Entity::insert_many(models)
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

fn new_active_model(exp: NewExperience) -> Result<ActiveModel, ExperienceRepositoryError> {
    let now = Utc::now().fixed_offset();

    Ok(ActiveModel {
        id: Set(Uuid::new_v4()),
        experience_type: Set(exp.kind.as_str().to_string()),
        title: Set(exp.title),
        org: Set(exp.org),
        period: Set(exp.period),
        summary: Set(exp.summary),
        highlights: Set(to_json(&exp.highlights)?),
        tags: Set(to_json(&exp.tags)?),
        links: Set(to_json(&exp.links)?),
        created_at: Set(now),
        updated_at: Set(now),
    })
}

fn model_to_experience(
    model: experiences::Model,
) -> Result<Experience, ExperienceRepositoryError> {
    let kind = model.experience_type.parse().map_err(|_| {
        ExperienceRepositoryError::SerializationError(format!(
            "experience {} has unknown type '{}'",
            model.id, model.experience_type
        ))
    })?;

    Ok(Experience {
        id: model.id,
        kind,
        title: model.title,
        org: model.org,
        period: model.period,
        summary: model.summary,
        highlights: from_json(&model.highlights)?,
        tags: from_json(&model.tags)?,
        links: from_json(&model.links)?,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ExperienceRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ExperienceRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ExperienceRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ExperienceRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ExperienceRepositoryError {
    ExperienceRepositoryError::DatabaseError(e.to_string())
}
