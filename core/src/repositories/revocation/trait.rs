//! Revocation store trait.

use async_trait::async_trait;
use chrono::Duration;
use std::fmt;

use crate::domain::entities::token::TokenDomain;
use crate::errors::DomainError;

/// Namespace for revocation entries.
///
/// Access and refresh domains mirror [`TokenDomain`]; CSRF tokens share the
/// store for their single-use bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevocationDomain {
    Access,
    Refresh,
    Csrf,
}

impl RevocationDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevocationDomain::Access => "access",
            RevocationDomain::Refresh => "refresh",
            RevocationDomain::Csrf => "csrf",
        }
    }
}

impl From<TokenDomain> for RevocationDomain {
    fn from(domain: TokenDomain) -> Self {
        match domain {
            TokenDomain::Access => RevocationDomain::Access,
            TokenDomain::Refresh => RevocationDomain::Refresh,
        }
    }
}

impl fmt::Display for RevocationDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable set of revoked token fingerprints with per-entry expiry.
///
/// Only fingerprints (irreversible digests of the raw token) are ever
/// stored. Entries expire with the token they represent, so the store
/// self-prunes and never accumulates bookkeeping for dead tokens.
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Record a fingerprint as revoked for `ttl`.
    ///
    /// A zero or negative `ttl` is a no-op success: an already-expired
    /// token needs no revocation bookkeeping.
    async fn add(
        &self,
        fingerprint: &str,
        domain: RevocationDomain,
        ttl: Duration,
    ) -> Result<(), DomainError>;

    /// Check whether a fingerprint is revoked.
    ///
    /// `Ok(false)` is a definitive "not revoked"; `Err(StoreUnavailable)`
    /// means the store could not be consulted, and security-sensitive
    /// callers must fail closed rather than treat it as absence.
    async fn contains(
        &self,
        fingerprint: &str,
        domain: RevocationDomain,
    ) -> Result<bool, DomainError>;
}
