//! Cache (Redis) configuration

use serde::{Deserialize, Serialize};

/// Redis connection configuration for the revocation store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Connection URL, e.g. `redis://localhost:6379`
    pub url: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://127.0.0.1:6379"),
        }
    }
}
