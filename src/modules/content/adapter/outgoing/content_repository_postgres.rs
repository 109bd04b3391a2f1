use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::modules::content::adapter::outgoing::sea_orm_entity::portfolio_content::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError, ContentSaved, StoredContent,
};
use crate::modules::content::domain::document::strip_server_fields;

/// Top-level JSONB merge, so keys absent from the incoming document survive.
const MERGE_DOCUMENT: &str = "portfolio_content.document || EXCLUDED.document";

#[derive(Clone)]
pub struct ContentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentRepository for ContentRepositoryPostgres {
    async fn load(&self, slug: &str) -> Result<Option<StoredContent>, ContentRepositoryError> {
        let model = Entity::find_by_id(slug.to_string())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(model_to_stored))
    }

    async fn upsert(
        &self,
        slug: &str,
        document: Map<String, Value>,
    ) -> Result<ContentSaved, ContentRepositoryError> {
        let mut document = document;
        strip_server_fields(&mut document);
        document.insert("slug".to_string(), Value::String(slug.to_string()));

        let now = Utc::now().fixed_offset();
        let model = ActiveModel {
            slug: Set(slug.to_string()),
            document: Set(Value::Object(document)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Slug)
                    .value(Column::Document, Expr::cust(MERGE_DOCUMENT))
                    .update_column(Column::UpdatedAt)
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(ContentSaved {
            slug: slug.to_string(),
            updated_at: now.into(),
        })
    }
}

fn model_to_stored(model: portfolio_content::Model) -> StoredContent {
    StoredContent {
        document: model.document,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;

    fn sample_model() -> portfolio_content::Model {
        let now = Utc::now().fixed_offset();
        portfolio_content::Model {
            slug: "default".to_string(),
            document: json!({ "slug": "default", "hero": { "name": "Sam" } }),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn load_returns_stored_document() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_model()]])
            .into_connection();
        let repo = ContentRepositoryPostgres::new(Arc::new(db));

        let stored = repo.load("default").await.unwrap().unwrap();

        assert_eq!(stored.document["hero"]["name"], "Sam");
    }

    #[tokio::test]
    async fn load_missing_document_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<portfolio_content::Model>::new()])
            .into_connection();
        let repo = ContentRepositoryPostgres::new(Arc::new(db));

        assert!(repo.load("default").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn load_database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection timeout".to_string())])
            .into_connection();
        let repo = ContentRepositoryPostgres::new(Arc::new(db));

        match repo.load("default").await.unwrap_err() {
            ContentRepositoryError::DatabaseError(msg) => assert!(msg.contains("connection timeout")),
            other => panic!("Expected DatabaseError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn upsert_merges_on_slug_conflict() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let db = Arc::new(db);
        let repo = ContentRepositoryPostgres::new(Arc::clone(&db));

        let document = json!({ "_id": "x", "createdAt": "old", "hero": { "name": "Sam" } })
            .as_object()
            .cloned()
            .unwrap();
        let saved = repo.upsert("default", document).await.unwrap();
        assert_eq!(saved.slug, "default");

        drop(repo);
        let db = Arc::try_unwrap(db).ok().expect("repository released the connection");
        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("ON CONFLICT"));
        assert!(log.contains(MERGE_DOCUMENT));
        assert!(log.contains("updated_at"));
        assert!(!log.contains("_id"));
        assert!(!log.contains("createdAt"));
    }

    #[tokio::test]
    async fn upsert_database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Custom("disk full".to_string())])
            .into_connection();
        let repo = ContentRepositoryPostgres::new(Arc::new(db));

        let err = repo.upsert("default", Map::new()).await.unwrap_err();

        assert!(matches!(err, ContentRepositoryError::DatabaseError(_)));
    }
}
