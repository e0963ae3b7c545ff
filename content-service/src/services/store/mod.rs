//! Storage abstraction for content records.
//!
//! Records cross this boundary as BSON documents so one object-safe trait can
//! serve every shape; typed conversion happens in the route factory.

pub mod memory;
pub mod mongo;

pub use memory::InMemoryContentStore;
pub use mongo::MongoDb;

use async_trait::async_trait;
use mongodb::bson::{self, Document};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] mongodb::error::Error),

    #[error(transparent)]
    Encode(#[from] bson::ser::Error),

    #[error(transparent)]
    Decode(#[from] bson::de::Error),

    #[error("{0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Insert a batch in order. Either every document is stored or the call
    /// fails and none of them remain.
    async fn insert_many(&self, collection: &str, documents: Vec<Document>)
        -> Result<(), StoreError>;

    /// Every document in the collection, in store order.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}
