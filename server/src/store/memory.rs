use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::{TodoChanges, TodoDocument, TodoStore};
use crate::error::StoreError;

/// In-process store with the same observable behaviour as `MongoStore`.
///
/// Documents are keyed by `ObjectId`, so listing returns them in creation
/// order. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: Arc<RwLock<BTreeMap<ObjectId, TodoDocument>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    pub async fn get(&self, id: &ObjectId) -> Option<TodoDocument> {
        self.documents.read().await.get(id).cloned()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<TodoDocument>, StoreError> {
        Ok(self.documents.read().await.values().cloned().collect())
    }

    async fn insert(&self, document: TodoDocument) -> Result<ObjectId, StoreError> {
        let mut documents = self.documents.write().await;
        let id = document.id;
        if documents.contains_key(&id) {
            return Err(StoreError::Backend(format!("duplicate key: _id {id}")));
        }
        documents.insert(id, document);
        Ok(id)
    }

    async fn update_by_id(&self, id: ObjectId, changes: TodoChanges) -> Result<(), StoreError> {
        let mut documents = self.documents.write().await;
        let document = documents.get_mut(&id).ok_or(StoreError::NotFound)?;
        document.title = changes.title;
        document.completed = changes.completed;
        Ok(())
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<(), StoreError> {
        let mut documents = self.documents.write().await;
        documents.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
