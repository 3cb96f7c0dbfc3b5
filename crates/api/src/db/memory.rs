//! In-memory pass store.
//!
//! The fake store for unit and router tests, and for running the service
//! locally without `PostgreSQL`. Same overwrite semantics as the real store.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use gatepass_core::{PassId, PassRecord};

use super::{PassStore, StoreError};

/// Pass store held in a `HashMap` behind a mutex.
#[derive(Debug, Default)]
pub struct InMemoryPassStore {
    passes: Mutex<HashMap<String, PassRecord>>,
}

impl InMemoryPassStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.passes.lock().expect("pass store lock poisoned").len()
    }

    /// Whether the store holds no records.
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PassStore for InMemoryPassStore {
    async fn put(&self, record: &PassRecord) -> Result<(), StoreError> {
        self.passes
            .lock()
            .expect("pass store lock poisoned")
            .insert(record.identifier.as_str().to_owned(), record.clone());
        Ok(())
    }

    async fn get(&self, id: &PassId) -> Result<Option<PassRecord>, StoreError> {
        Ok(self
            .passes
            .lock()
            .expect("pass store lock poisoned")
            .get(id.as_str())
            .cloned())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str) -> PassRecord {
        let id = PassId::parse(phone).unwrap();
        PassRecord {
            identifier: id.clone(),
            name: name.to_owned(),
            phone: phone.to_owned(),
            picture_url: None,
            barcode_data: id,
        }
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = InMemoryPassStore::new();
        store.put(&record("Alice", "555-1234")).await.unwrap();

        let id = PassId::parse("555-1234").unwrap();
        let found = store.get(&id).await.unwrap().unwrap();
        assert_eq!(found.name, "Alice");
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = InMemoryPassStore::new();
        let id = PassId::parse("nonexistent-code").unwrap();
        assert!(store.get(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = InMemoryPassStore::new();
        store.put(&record("Alice", "555-1234")).await.unwrap();
        store.put(&record("Bob", "555-1234")).await.unwrap();

        let id = PassId::parse("555-1234").unwrap();
        let found = store.get(&id).await.unwrap().unwrap();
        assert_eq!(found.name, "Bob");
        assert_eq!(store.len(), 1);
    }
}
