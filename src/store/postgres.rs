use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set, sea_query::OnConflict,
};
use serde_json::{Map, Value};
use sqlx::{FromRow, PgPool};

use super::{Document, DocumentStore, StoreError, StoreResult, new_document_id};
use crate::entity::documents::{ActiveModel, Column, Entity as Documents};

/// Postgres-backed store: one `documents` row per document, payload in `jsonb`.
///
/// Keyed reads and writes go through SeaORM; the jsonb merge and containment
/// queries are plain SQL.
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
    orm: DatabaseConnection,
}

#[derive(FromRow)]
struct DocumentRow {
    id: String,
    data: Value,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool, orm: DatabaseConnection) -> Self {
        Self { pool, orm }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Value>> {
        let doc = Documents::find_by_id((collection.to_string(), id.to_string()))
            .one(&self.orm)
            .await?;
        Ok(doc.map(|model| model.data))
    }

    async fn set(&self, collection: &str, id: &str, data: Value) -> StoreResult<()> {
        let active = ActiveModel {
            collection: Set(collection.to_string()),
            id: Set(id.to_string()),
            data: Set(data),
            created_at: NotSet,
            updated_at: Set(Utc::now().into()),
        };
        Documents::insert(active)
            .on_conflict(
                OnConflict::columns([Column::Collection, Column::Id])
                    .update_columns([Column::Data, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.orm)
            .await?;
        Ok(())
    }

    async fn add(&self, collection: &str, data: Value) -> StoreResult<String> {
        let id = new_document_id();
        self.set(collection, &id, data).await?;
        Ok(id)
    }

    async fn update(&self, collection: &str, id: &str, patch: Value) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE documents
            SET data = data || $3, updated_at = NOW()
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(patch)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()> {
        Documents::delete_by_id((collection.to_string(), id.to_string()))
            .exec(&self.orm)
            .await?;
        Ok(())
    }

    async fn list(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let docs = Documents::find()
            .filter(Column::Collection.eq(collection))
            .order_by_asc(Column::CreatedAt)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(|model| Document {
                id: model.id,
                data: model.data,
            })
            .collect();
        Ok(docs)
    }

    async fn query(
        &self,
        collection: &str,
        filters: &[(&str, Value)],
    ) -> StoreResult<Vec<Document>> {
        let containment: Map<String, Value> = filters
            .iter()
            .map(|(field, value)| (field.to_string(), value.clone()))
            .collect();

        let rows = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, data FROM documents WHERE collection = $1 AND data @> $2",
        )
        .bind(collection)
        .bind(Value::Object(containment))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Document {
                id: row.id,
                data: row.data,
            })
            .collect())
    }
}
