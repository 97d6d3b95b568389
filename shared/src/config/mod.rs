//! Application configuration
//!
//! Configuration is split per concern and assembled into [`AppConfig`].
//! Values are loaded from the environment (optionally via a `.env` file)
//! using the `config` crate with the `WARDEN_` prefix, e.g.
//! `WARDEN_JWT__ACCESS_SECRET`, `WARDEN_DATABASE__URL`.

mod auth;
mod cache;
mod database;
mod server;

pub use auth::{CsrfConfig, JwtConfig};
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// MySQL connection settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Redis connection settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// JWT signing settings
    #[serde(default)]
    pub jwt: JwtConfig,

    /// CSRF token settings
    #[serde(default)]
    pub csrf: CsrfConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Nested fields use a double-underscore separator, so
    /// `WARDEN_JWT__ACCESS_SECRET` maps to `jwt.access_secret`.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("WARDEN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
