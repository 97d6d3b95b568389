//! In-process revocation store.
//!
//! Fallback for deployments without Redis. All reads and writes go through
//! a single mutex; entries carry their own deadline and are pruned lazily
//! on lookup, so no background sweeper is needed.

use async_trait::async_trait;
use chrono::Duration;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::time::Instant;

use crate::errors::DomainError;

use super::trait_::{RevocationDomain, RevocationStore};

/// Mutex-guarded in-memory revocation store
pub struct InMemoryRevocationStore {
    entries: Mutex<HashMap<(RevocationDomain, String), Instant>>,
}

impl InMemoryRevocationStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryRevocationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevocationStore for InMemoryRevocationStore {
    async fn add(
        &self,
        fingerprint: &str,
        domain: RevocationDomain,
        ttl: Duration,
    ) -> Result<(), DomainError> {
        // An already-expired token needs no entry.
        let Ok(ttl) = ttl.to_std() else {
            return Ok(());
        };
        if ttl.is_zero() {
            return Ok(());
        }

        let mut entries = self.entries.lock().map_err(|_| DomainError::StoreUnavailable {
            message: "revocation store lock poisoned".to_string(),
        })?;
        entries.insert((domain, fingerprint.to_string()), Instant::now() + ttl);
        Ok(())
    }

    async fn contains(
        &self,
        fingerprint: &str,
        domain: RevocationDomain,
    ) -> Result<bool, DomainError> {
        let mut entries = self.entries.lock().map_err(|_| DomainError::StoreUnavailable {
            message: "revocation store lock poisoned".to_string(),
        })?;

        let key = (domain, fingerprint.to_string());
        match entries.get(&key) {
            Some(deadline) if *deadline <= Instant::now() => {
                entries.remove(&key);
                Ok(false)
            }
            Some(_) => Ok(true),
            None => Ok(false),
        }
    }
}
