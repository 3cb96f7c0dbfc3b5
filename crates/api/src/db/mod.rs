//! The pass store persistence boundary.
//!
//! One collection of [`PassRecord`] documents keyed by identifier, with
//! get-by-key and set-by-key (full overwrite) semantics. The store is
//! injected as a [`PassStore`] trait object so handlers and tests can
//! substitute [`memory::InMemoryPassStore`] for the `PostgreSQL` backend.
//!
//! # Migrations
//!
//! Migrations live in `crates/api/migrations/` and are embedded with
//! `sqlx::migrate!`; the binary runs them on startup.

pub mod memory;
pub mod postgres;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use gatepass_core::{PassId, PassRecord};

/// Errors returned by the pass store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying database operation failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored document could not be decoded into a `PassRecord`.
    #[error("stored pass record is corrupt: {0}")]
    DataCorruption(String),
}

/// Key-value access to persisted pass records.
///
/// Writes fully replace any record already stored at the key; the backing
/// store's per-key atomicity is the only concurrency guarantee (concurrent
/// writes to one identifier are last-write-wins).
#[async_trait]
pub trait PassStore: Send + Sync {
    /// Persist a record under `record.identifier`, replacing any prior record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the write fails.
    async fn put(&self, record: &PassRecord) -> Result<(), StoreError>;

    /// Fetch the record stored under `id`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the lookup fails. An absent key is
    /// `Ok(None)`, not an error.
    async fn get(&self, id: &PassId) -> Result<Option<PassRecord>, StoreError>;

    /// Check that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the store does not answer.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
