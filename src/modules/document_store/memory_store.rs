use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{with_document_id, DocumentStore};
use crate::core::error::Result;

/// Process-local collection, backs the handler and client tests
#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<Vec<(Uuid, Value)>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw documents as inserted, without the `_id` key
    pub async fn snapshot(&self) -> Vec<Value> {
        self.documents
            .read()
            .await
            .iter()
            .map(|(_, doc)| doc.clone())
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert_one(&self, document: Value) -> Result<Uuid> {
        let id = Uuid::now_v7();
        self.documents.write().await.push((id, document));
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<Value>> {
        Ok(self
            .documents
            .read()
            .await
            .iter()
            .map(|(id, doc)| with_document_id(*id, doc.clone()))
            .collect())
    }
}
