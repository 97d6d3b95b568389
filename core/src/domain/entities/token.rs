//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The tagged purpose of a token.
///
/// The domain is embedded in the signed payload and checked against the
/// caller's expectation on every verification, so an access token can never
/// pass where a refresh token is required, regardless of which secret it
/// happens to verify under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenDomain {
    Access,
    Refresh,
}

impl TokenDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenDomain::Access => "access",
            TokenDomain::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (opaque user identity)
    pub sub: String,

    /// Token domain tag
    pub domain: TokenDomain,

    /// Issued at timestamp (unix seconds)
    pub iat: i64,

    /// Expiration timestamp (unix seconds)
    pub exp: i64,

    /// Unique token id; keeps two tokens minted within the same second
    /// from being byte-identical (rotation depends on this)
    pub jti: String,
}

impl Claims {
    /// Creates claims expiring `ttl` from now.
    pub fn new(subject: impl Into<String>, domain: TokenDomain, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.into(),
            domain,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Time left until expiry; zero once expired.
    ///
    /// Revocation entries are bounded by this value so the store never
    /// outlives the tokens it tracks.
    pub fn remaining_lifetime(&self) -> Duration {
        Duration::seconds((self.exp - Utc::now().timestamp()).max(0))
    }
}

/// Access/refresh token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_expire_after_issuance() {
        let claims = Claims::new("user-1", TokenDomain::Access, Duration::minutes(15));

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.domain, TokenDomain::Access);
        assert!(claims.exp > claims.iat);
        assert!(!claims.is_expired());
    }

    #[test]
    fn expired_claims_report_zero_remaining_lifetime() {
        let mut claims = Claims::new("user-1", TokenDomain::Refresh, Duration::days(30));
        claims.exp = Utc::now().timestamp() - 10;

        assert!(claims.is_expired());
        assert_eq!(claims.remaining_lifetime(), Duration::zero());
    }

    #[test]
    fn domain_tag_serializes_lowercase() {
        let claims = Claims::new("user-1", TokenDomain::Refresh, Duration::days(1));
        let value = serde_json::to_value(&claims).unwrap();

        assert_eq!(value["domain"], "refresh");
        assert_eq!(value["sub"], "user-1");
    }

    #[test]
    fn claims_round_trip_through_json() {
        let claims = Claims::new("user-1", TokenDomain::Access, Duration::minutes(15));
        let json = serde_json::to_string(&claims).unwrap();
        let decoded: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, decoded);
    }
}
