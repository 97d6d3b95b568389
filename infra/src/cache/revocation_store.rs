//! Redis implementation of the revocation store.
//!
//! Each fingerprint lives under its own key with a store-native TTL equal
//! to the remaining token lifetime (`SET key 1 EX ttl`), so entries are
//! independently atomic and expire without any sweeper. No extra locking
//! is needed on top of Redis.

use async_trait::async_trait;
use chrono::Duration;
use redis::aio::MultiplexedConnection;
use redis::Client;
use tracing::{debug, info};

use warden_core::errors::DomainError;
use warden_core::repositories::revocation::{RevocationDomain, RevocationStore};
use warden_shared::config::CacheConfig;

use crate::InfrastructureError;

/// Revocation store over a multiplexed Redis connection
#[derive(Clone)]
pub struct RedisRevocationStore {
    connection: MultiplexedConnection,
}

impl RedisRevocationStore {
    /// Connect to Redis using the given configuration
    pub async fn connect(config: &CacheConfig) -> Result<Self, InfrastructureError> {
        let client = Client::open(config.url.as_str())?;
        let connection = client.get_multiplexed_async_connection().await?;
        info!("redis revocation store connected");
        Ok(Self { connection })
    }

    /// Wrap an existing connection
    pub fn new(connection: MultiplexedConnection) -> Self {
        Self { connection }
    }

    fn key(domain: RevocationDomain, fingerprint: &str) -> String {
        format!("revoked:{}:{}", domain.as_str(), fingerprint)
    }
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn add(
        &self,
        fingerprint: &str,
        domain: RevocationDomain,
        ttl: Duration,
    ) -> Result<(), DomainError> {
        let seconds = ttl.num_seconds();
        if seconds <= 0 {
            debug!(domain = %domain, "skipping revocation of already-expired token");
            return Ok(());
        }

        let mut connection = self.connection.clone();
        redis::cmd("SET")
            .arg(Self::key(domain, fingerprint))
            .arg("1")
            .arg("EX")
            .arg(seconds as u64)
            .query_async::<_, ()>(&mut connection)
            .await
            .map_err(|e| DomainError::StoreUnavailable {
                message: format!("redis set failed: {e}"),
            })
    }

    async fn contains(
        &self,
        fingerprint: &str,
        domain: RevocationDomain,
    ) -> Result<bool, DomainError> {
        let mut connection = self.connection.clone();
        let value: Option<String> = redis::cmd("GET")
            .arg(Self::key(domain, fingerprint))
            .query_async(&mut connection)
            .await
            .map_err(|e| DomainError::StoreUnavailable {
                message: format!("redis get failed: {e}"),
            })?;

        Ok(value.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_namespaced_by_domain() {
        assert_eq!(
            RedisRevocationStore::key(RevocationDomain::Refresh, "abc123"),
            "revoked:refresh:abc123"
        );
        assert_eq!(
            RedisRevocationStore::key(RevocationDomain::Csrf, "abc123"),
            "revoked:csrf:abc123"
        );
    }
}
