use async_trait::async_trait;
use serde_json::Value;
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use super::{with_document_id, DocumentStore};
use crate::core::error::{AppError, Result};

/// Document collection stored in the `documents` table
pub struct PgDocumentStore {
    pool: PgPool,
    collection: String,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool, collection: impl Into<String>) -> Self {
        Self {
            pool,
            collection: collection.into(),
        }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert_one(&self, document: Value) -> Result<Uuid> {
        let id = Uuid::now_v7();

        sqlx::query(
            r#"
            INSERT INTO documents (id, collection, body)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(id)
        .bind(&self.collection)
        .bind(Json(document))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert document into {}: {:?}", self.collection, e);
            AppError::Database(e)
        })?;

        tracing::debug!("Document inserted: collection={}, id={}", self.collection, id);

        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<Value>> {
        let rows: Vec<(Uuid, Json<Value>)> = sqlx::query_as(
            r#"
            SELECT id, body
            FROM documents
            WHERE collection = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(&self.collection)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list documents of {}: {:?}", self.collection, e);
            AppError::Database(e)
        })?;

        Ok(rows
            .into_iter()
            .map(|(id, Json(body))| with_document_id(id, body))
            .collect())
    }
}
