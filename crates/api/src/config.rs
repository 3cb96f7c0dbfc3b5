//! Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `GATEPASS_DATABASE_URL` - `PostgreSQL` connection string for the pass
//!   store (falls back to `DATABASE_URL`). The service refuses to start
//!   without it.
//!
//! ## Optional
//! - `GATEPASS_HOST` - Bind address (default: 127.0.0.1)
//! - `GATEPASS_PORT` - Listen port (default: 5000)
//! - `GATEPASS_FONT_DIR` - Directory holding the document font family
//!   (default: assets/fonts)
//! - `GATEPASS_FONT_FAMILY` - Font family name, expects the usual
//!   `{name}-Regular.ttf` etc. file layout (default: `LiberationSans`)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Pass service configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory holding the document font family files
    pub font_dir: PathBuf,
    /// Font family name used in pass documents
    pub font_family: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the database credential is missing or a
    /// variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("GATEPASS_DATABASE_URL")?;
        let host = get_env_or_default("GATEPASS_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("GATEPASS_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("GATEPASS_PORT", "5000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("GATEPASS_PORT".to_string(), e.to_string()))?;
        let font_dir = PathBuf::from(get_env_or_default("GATEPASS_FONT_DIR", "assets/fonts"));
        let font_family = get_env_or_default("GATEPASS_FONT_FAMILY", "LiberationSans");
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            database_url,
            host,
            port,
            font_dir,
            font_family,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
