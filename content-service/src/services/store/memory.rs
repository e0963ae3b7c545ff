use super::{ContentStore, StoreError};
use async_trait::async_trait;
use mongodb::bson::Document;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

/// Process-local store used for `STORE_BACKEND=memory` and in tests.
///
/// Marking it unavailable makes every operation fail, which stands in for a
/// lost database connection.
pub struct InMemoryContentStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    available: AtomicBool,
}

impl Default for InMemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
            available: AtomicBool::new(true),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of documents currently held in `collection`.
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .map(|c| c.get(collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }

    fn ensure_available(&self) -> Result<(), StoreError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable(
                "In-memory store is unavailable".to_string(),
            ))
        }
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<(), StoreError> {
        self.ensure_available()?;
        self.collections
            .write()
            .map_err(|e| StoreError::Unavailable(format!("In-memory store lock poisoned: {}", e)))?
            .entry(collection.to_string())
            .or_default()
            .extend(documents);
        Ok(())
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        self.ensure_available()?;
        let documents = self
            .collections
            .read()
            .map_err(|e| StoreError::Unavailable(format!("In-memory store lock poisoned: {}", e)))?
            .get(collection)
            .cloned()
            .unwrap_or_default();
        Ok(documents)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.ensure_available()
    }
}
