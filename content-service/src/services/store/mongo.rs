use super::{ContentStore, StoreError};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, Document},
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    /// Parse the connection string and build the client. The driver connects
    /// lazily, so an unreachable server only surfaces on first use.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        Ok(Self { client, db })
    }

    pub fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Remove whatever part of a failed batch made it into the collection.
    async fn rollback_batch(&self, collection: &str, ids: Vec<Bson>) {
        let count = ids.len();
        match self
            .collection(collection)
            .delete_many(doc! { "_id": { "$in": ids } }, None)
            .await
        {
            Ok(result) => tracing::warn!(
                collection = %collection,
                batch_size = count,
                removed = result.deleted_count,
                "Rolled back partially inserted batch"
            ),
            Err(e) => tracing::error!(
                collection = %collection,
                batch_size = count,
                "Failed to roll back partially inserted batch: {}",
                e
            ),
        }
    }
}

#[async_trait]
impl ContentStore for MongoDb {
    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<(), StoreError> {
        // The driver rejects empty batches.
        if documents.is_empty() {
            return Ok(());
        }

        let ids: Vec<Bson> = documents
            .iter()
            .filter_map(|d| d.get("_id").cloned())
            .collect();

        if let Err(e) = self
            .collection(collection)
            .insert_many(&documents, None)
            .await
        {
            tracing::error!(
                collection = %collection,
                "Failed to insert batch of {} documents: {}",
                documents.len(),
                e
            );
            self.rollback_batch(collection, ids).await;
            return Err(StoreError::from(e));
        }

        Ok(())
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let cursor = self
            .collection(collection)
            .find(doc! {}, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to query collection: {}", e);
                StoreError::from(e)
            })?;

        Ok(cursor.try_collect().await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                StoreError::from(e)
            })?;
        Ok(())
    }
}
