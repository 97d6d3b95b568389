//! CSRF codec configuration

use chrono::Duration;
use warden_shared::config::CsrfConfig;

use crate::errors::{DomainError, DomainResult};

/// Configuration for [`CsrfCodec`](super::CsrfCodec)
#[derive(Debug, Clone)]
pub struct CsrfCodecConfig {
    /// Signing secret for CSRF tokens
    pub secret: String,

    /// Token lifetime in seconds; deliberately short (minutes, not hours)
    pub ttl: i64,
}

impl CsrfCodecConfig {
    /// Configuration with the default two-minute lifetime
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ttl: 120,
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::seconds(self.ttl)
    }

    pub(crate) fn validate(&self) -> DomainResult<()> {
        if self.secret.is_empty() {
            return Err(DomainError::Configuration {
                message: "csrf secret must not be empty".to_string(),
            });
        }
        if self.ttl <= 0 {
            return Err(DomainError::Configuration {
                message: "csrf token lifetime must be positive".to_string(),
            });
        }
        Ok(())
    }
}

impl From<&CsrfConfig> for CsrfCodecConfig {
    fn from(config: &CsrfConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            ttl: config.token_expiry,
        }
    }
}
