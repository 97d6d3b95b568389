//! HTTP server configuration

use serde::{Deserialize, Serialize};

/// Bind address configuration for the API server
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Allowed CORS origins, comma separated; `*` allows any origin
    pub cors_allow_origins: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            cors_allow_origins: String::from("*"),
        }
    }
}

impl ServerConfig {
    /// The address to bind the HTTP listener to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
