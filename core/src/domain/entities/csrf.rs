//! CSRF token claims.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims for a single-use, path-bound CSRF token.
///
/// A token is valid for exactly one path and is revoked on first successful
/// use; the nonce keeps repeated mints for the same path from colliding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsrfClaims {
    /// The request path this token is bound to
    pub path: String,

    /// Random nonce
    pub nonce: String,

    /// Issued at timestamp (unix seconds)
    pub iat: i64,

    /// Expiration timestamp (unix seconds)
    pub exp: i64,
}

impl CsrfClaims {
    /// Creates claims bound to `path`, expiring `ttl` from now.
    pub fn new(path: impl Into<String>, ttl: Duration, nonce: String) -> Self {
        let now = Utc::now();
        Self {
            path: path.into(),
            nonce,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Time left until expiry; zero once expired.
    pub fn remaining_lifetime(&self) -> Duration {
        Duration::seconds((self.exp - Utc::now().timestamp()).max(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_are_bound_to_a_path() {
        let claims = CsrfClaims::new("/orders", Duration::minutes(2), "abc123".to_string());

        assert_eq!(claims.path, "/orders");
        assert_eq!(claims.nonce, "abc123");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn remaining_lifetime_is_clamped_at_zero() {
        let mut claims = CsrfClaims::new("/orders", Duration::minutes(2), "n".to_string());
        claims.exp = Utc::now().timestamp() - 1;

        assert_eq!(claims.remaining_lifetime(), Duration::zero());
    }
}
