//! Document storage
//!
//! A minimal document-collection abstraction: insert a JSON document, list
//! every document of the collection. Backed by PostgreSQL `JSONB` rows in
//! production and by an in-memory vector in tests.

mod memory_store;
mod postgres_store;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::core::error::Result;

pub use memory_store::MemoryDocumentStore;
pub use postgres_store::PgDocumentStore;

/// Key under which listed documents expose their identifier
pub const DOCUMENT_ID_KEY: &str = "_id";

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one document and return its identifier
    async fn insert_one(&self, document: Value) -> Result<Uuid>;

    /// Every document of the collection in insertion order, each carrying
    /// its identifier under `_id`
    async fn find_all(&self) -> Result<Vec<Value>>;
}

/// Add the identifier to an object document; other JSON values are returned as-is
pub(crate) fn with_document_id(id: Uuid, document: Value) -> Value {
    match document {
        Value::Object(mut map) => {
            map.insert(DOCUMENT_ID_KEY.to_string(), Value::String(id.to_string()));
            Value::Object(map)
        }
        other => other,
    }
}
