use std::time::Duration;

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::{
    Acknowledgment, ClientOptions, ReadConcern, ReadPreference, SelectionCriteria, WriteConcern,
};
use mongodb::{Client, Collection, Database};
use tracing::info;

use super::{TodoChanges, TodoDocument, TodoStore};
use crate::config::{Config, Consistency};
use crate::error::StoreError;

const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// `TodoStore` backed by one MongoDB collection.
///
/// The driver keeps its own connection pool behind `Client`; one `MongoStore`
/// is built at startup and shared by every request.
#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Database,
    collection: Collection<TodoDocument>,
}

impl MongoStore {
    /// Open the client, apply the consistency mode and check the server is
    /// reachable. Any failure here should stop the process.
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(&config.mongo_uri).await?;
        options.app_name = Some("todo-server".to_string());
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
        options.selection_criteria = Some(SelectionCriteria::ReadPreference(
            config.consistency.read_preference(),
        ));
        options.read_concern = Some(config.consistency.read_concern());
        options.write_concern = Some(config.consistency.write_concern());

        let client = Client::with_options(options)?;
        let database = client.database(&config.database);
        let store = Self {
            collection: database.collection(&config.collection),
            database,
        };
        store.ping().await?;

        info!(
            database = %config.database,
            collection = %config.collection,
            consistency = ?config.consistency,
            "connected to mongodb"
        );
        Ok(store)
    }
}

impl Consistency {
    pub fn read_preference(self) -> ReadPreference {
        match self {
            Consistency::Strong => ReadPreference::Primary,
            Consistency::Monotonic => ReadPreference::PrimaryPreferred {
                options: Default::default(),
            },
            Consistency::Eventual => ReadPreference::Nearest {
                options: Default::default(),
            },
        }
    }

    pub fn read_concern(self) -> ReadConcern {
        match self {
            Consistency::Strong => ReadConcern::majority(),
            Consistency::Monotonic | Consistency::Eventual => ReadConcern::local(),
        }
    }

    pub fn write_concern(self) -> WriteConcern {
        match self {
            Consistency::Strong | Consistency::Monotonic => WriteConcern::builder()
                .w(Acknowledgment::Majority)
                .journal(true)
                .build(),
            Consistency::Eventual => WriteConcern::builder().w(Acknowledgment::Nodes(1)).build(),
        }
    }
}

#[async_trait]
impl TodoStore for MongoStore {
    async fn find_all(&self) -> Result<Vec<TodoDocument>, StoreError> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<TodoDocument> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn insert(&self, document: TodoDocument) -> Result<ObjectId, StoreError> {
        self.collection.insert_one(&document).await?;
        Ok(document.id)
    }

    async fn update_by_id(&self, id: ObjectId, changes: TodoChanges) -> Result<(), StoreError> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "title": changes.title, "completed": changes.completed } },
            )
            .await?;
        if result.matched_count == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<(), StoreError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        if result.deleted_count == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
