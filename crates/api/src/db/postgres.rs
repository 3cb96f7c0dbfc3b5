//! `PostgreSQL`-backed pass store.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

use gatepass_core::{PassId, PassRecord};

use super::{PassStore, StoreError};

/// Pass store backed by one `passes` table.
///
/// Records are stored as JSONB documents keyed by the pass identifier;
/// writes upsert, so re-issuing a pass replaces the prior document in a
/// single statement.
#[derive(Clone)]
pub struct PgPassStore {
    pool: PgPool,
}

impl PgPassStore {
    /// Create a new store over an existing connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl PassStore for PgPassStore {
    async fn put(&self, record: &PassRecord) -> Result<(), StoreError> {
        sqlx::query(
            r"
            INSERT INTO passes (identifier, record)
            VALUES ($1, $2)
            ON CONFLICT (identifier) DO UPDATE SET record = EXCLUDED.record
            ",
        )
        .bind(record.identifier.as_str())
        .bind(Json(record))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get(&self, id: &PassId) -> Result<Option<PassRecord>, StoreError> {
        let row: Option<(Json<PassRecord>,)> =
            sqlx::query_as("SELECT record FROM passes WHERE identifier = $1")
                .bind(id.as_str())
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(Json(record),)| record))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
