//! Token codec configuration

use chrono::Duration;
use warden_shared::config::JwtConfig;

use crate::domain::entities::token::TokenDomain;
use crate::errors::{DomainError, DomainResult};

/// Configuration for [`TokenCodec`](super::TokenCodec)
#[derive(Debug, Clone)]
pub struct TokenCodecConfig {
    /// Secret for the access domain
    pub access_secret: String,

    /// Secret for the refresh domain
    pub refresh_secret: String,

    /// Access token lifetime in seconds
    pub access_ttl: i64,

    /// Refresh token lifetime in seconds
    pub refresh_ttl: i64,
}

impl TokenCodecConfig {
    /// Configuration with the default lifetimes (15 minutes / 30 days)
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            access_ttl: 900,
            refresh_ttl: 2_592_000,
        }
    }

    /// Lifetime of tokens in the given domain
    pub fn ttl(&self, domain: TokenDomain) -> Duration {
        match domain {
            TokenDomain::Access => Duration::seconds(self.access_ttl),
            TokenDomain::Refresh => Duration::seconds(self.refresh_ttl),
        }
    }

    pub(crate) fn secret(&self, domain: TokenDomain) -> &str {
        match domain {
            TokenDomain::Access => &self.access_secret,
            TokenDomain::Refresh => &self.refresh_secret,
        }
    }

    /// Reject configurations that would mint unverifiable or inverted
    /// tokens; construction fails fast instead of surfacing at call time.
    pub(crate) fn validate(&self) -> DomainResult<()> {
        if self.access_secret.is_empty() || self.refresh_secret.is_empty() {
            return Err(DomainError::Configuration {
                message: "token secrets must not be empty".to_string(),
            });
        }
        if self.access_ttl <= 0 || self.refresh_ttl <= 0 {
            return Err(DomainError::Configuration {
                message: "token lifetimes must be positive".to_string(),
            });
        }
        if self.access_ttl >= self.refresh_ttl {
            return Err(DomainError::Configuration {
                message: "access token lifetime must be shorter than refresh token lifetime"
                    .to_string(),
            });
        }
        Ok(())
    }
}

impl From<&JwtConfig> for TokenCodecConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            access_secret: config.access_secret.clone(),
            refresh_secret: config.refresh_secret.clone(),
            access_ttl: config.access_token_expiry,
            refresh_ttl: config.refresh_token_expiry,
        }
    }
}
