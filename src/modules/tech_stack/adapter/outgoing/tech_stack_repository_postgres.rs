use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::tech_stack::adapter::outgoing::sea_orm_entity::tech_stacks::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::tech_stack::application::domain::entities::{
    NewTechStack, TechStack, TechStackPatch,
};
use crate::modules::tech_stack::application::ports::outgoing::{
    TechStackRepository, TechStackRepositoryError,
};
use crate::shared::patch::PatchField;

#[derive(Clone)]
pub struct TechStackRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TechStackRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TechStackRepository for TechStackRepositoryPostgres {
    async fn list(&self) -> Result<Vec<TechStack>, TechStackRepositoryError> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_tech)
            .collect()
    }

    async fn create(&self, tech: NewTechStack) -> Result<TechStack, TechStackRepositoryError> {
        let result = new_active_model(tech)
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;

        model_to_tech(result)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: TechStackPatch,
    ) -> Result<TechStack, TechStackRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(name) = patch.name {
            model.name = Set(name);
        }
        if let PatchField::Value(category) = patch.category {
            model.category = Set(category.as_str().to_string());
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
            .ok_or(TechStackRepositoryError::NotFound)?;

        model_to_tech(result)
    }

    async fn delete(&self, id: Uuid) -> Result<(), TechStackRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TechStackRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, TechStackRepositoryError> {
        Entity::find().count(&*self.db).await.map_err(map_db_err)
    }

    async fn delete_all(&self) -> Result<u64, TechStackRepositoryError> {
        Ok(Entity::delete_many()
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?
            .rows_affected)
    }

    async fn insert_many(
        &self,
        techs: Vec<NewTechStack>,
    ) -> Result<u64, TechStackRepositoryError> {
        if techs.is_empty() {
            return Ok(0);
        }

        Entity::insert_many(techs.into_iter().map(new_active_model))
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

fn new_active_model(tech: NewTechStack) -> ActiveModel {
    let now = Utc::now().fixed_offset();

    ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(tech.name),
        category: Set(tech.category.as_str().to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

fn model_to_tech(model: tech_stacks::Model) -> Result<TechStack, TechStackRepositoryError> {
    let category = model.category.parse().map_err(|_| {
        TechStackRepositoryError::CorruptRow(format!(
            "tech stack {} has unknown category '{}'",
            model.id, model.category
        ))
    })?;

    Ok(TechStack {
        id: model.id,
        name: model.name,
        category,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> TechStackRepositoryError {
    TechStackRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use crate::modules::tech_stack::application::domain::entities::TechCategory;

    fn model(name: &str, category: &str) -> tech_stacks::Model {
        let now = Utc::now().fixed_offset();
        tech_stacks::Model {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_list_parses_categories() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("Rust", "languages"), model("Git", "tools")]])
            .into_connection();

        let repo = TechStackRepositoryPostgres::new(Arc::new(db));
        let list = repo.list().await.unwrap();

        assert_eq!(list[0].category, TechCategory::Languages);
        assert_eq!(list[1].category, TechCategory::Tools);
    }

    #[tokio::test]
    async fn test_list_flags_unknown_category() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("Rust", "hobbies")]])
            .into_connection();

        let repo = TechStackRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.list().await,
            Err(TechStackRepositoryError::CorruptRow(_))
        ));
    }

    #[tokio::test]
    async fn test_create_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("Rust", "languages")]])
            .into_connection();

        let repo = TechStackRepositoryPostgres::new(Arc::new(db));
        let tech = repo
            .create(NewTechStack {
                name: "Rust".to_string(),
                category: TechCategory::Languages,
            })
            .await
            .unwrap();

        assert_eq!(tech.name, "Rust");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<tech_stacks::Model>::new()])
            .into_connection();

        let repo = TechStackRepositoryPostgres::new(Arc::new(db));
        let patch = TechStackPatch {
            name: PatchField::Value("Go".to_string()),
            ..Default::default()
        };

        assert_eq!(
            repo.update(Uuid::new_v4(), patch).await.unwrap_err(),
            TechStackRepositoryError::NotFound
        );
    }

    #[tokio::test]
    async fn test_delete_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = TechStackRepositoryPostgres::new(Arc::new(db));

        assert!(repo.delete(Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn test_database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("boom".to_string())])
            .into_connection();

        let repo = TechStackRepositoryPostgres::new(Arc::new(db));

        match repo.list().await.unwrap_err() {
            TechStackRepositoryError::DatabaseError(msg) => assert!(msg.contains("boom")),
            other => panic!("Expected DatabaseError, got {:?}", other),
        }
    }
}
