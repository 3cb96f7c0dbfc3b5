//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::db::PassStore;
use crate::services::issuer::PassIssuer;
use crate::services::pdf::DocumentRenderer;
use crate::services::picture::PictureFetcher;

/// Error creating application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("http client setup failed: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources: configuration, the pass store, and the issuer. The
/// store and renderer are injected so tests can substitute fakes.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    store: Arc<dyn PassStore>,
    issuer: PassIssuer,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Service configuration
    /// * `store` - The pass store (PostgreSQL in production, in-memory in tests)
    /// * `renderer` - The document layout engine
    ///
    /// # Errors
    ///
    /// Returns an error if the picture-fetch HTTP client cannot be built.
    pub fn new(
        config: ApiConfig,
        store: Arc<dyn PassStore>,
        renderer: Arc<dyn DocumentRenderer>,
    ) -> Result<Self, StateError> {
        let pictures = PictureFetcher::new()?;
        let issuer = PassIssuer::new(Arc::clone(&store), renderer, pictures);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                issuer,
            }),
        })
    }

    /// Get a reference to the service configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the pass store.
    #[must_use]
    pub fn store(&self) -> &dyn PassStore {
        self.inner.store.as_ref()
    }

    /// Get a reference to the pass issuer.
    #[must_use]
    pub fn issuer(&self) -> &PassIssuer {
        &self.inner.issuer
    }
}
