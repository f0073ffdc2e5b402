//! Document store adapter.
//!
//! Handlers only see the `TodoStore` trait and the persisted shape,
//! `TodoDocument`. Two backends implement it: `MongoStore` for real
//! deployments and `MemoryStore` for local runs and tests.
//!
//! No operation is retried here. Whatever the backend reports goes straight
//! back to the caller.

mod memory;
mod mongo;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// A todo as persisted in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub completed: bool,
    #[serde(rename = "createAt")]
    pub created_at: DateTime,
}

/// Fields an update may replace. `createAt` and `_id` are never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoChanges {
    pub title: String,
    pub completed: bool,
}

#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Every document in the collection, unfiltered.
    async fn find_all(&self) -> Result<Vec<TodoDocument>, StoreError>;

    /// Persist a new document and return its identifier.
    async fn insert(&self, document: TodoDocument) -> Result<ObjectId, StoreError>;

    /// `StoreError::NotFound` when no document has this id.
    async fn update_by_id(&self, id: ObjectId, changes: TodoChanges) -> Result<(), StoreError>;

    /// `StoreError::NotFound` when no document has this id.
    async fn delete_by_id(&self, id: ObjectId) -> Result<(), StoreError>;

    /// One round trip to the backend.
    async fn ping(&self) -> Result<(), StoreError>;
}
