//! JWT and CSRF token configuration

use serde::{Deserialize, Serialize};

/// JWT signing configuration
///
/// Access and refresh tokens are signed with independent secrets so a
/// token minted for one purpose can never verify under the other.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret for signing access tokens
    pub access_secret: String,

    /// Secret for signing refresh tokens
    pub refresh_secret: String,

    /// Access token lifetime in seconds
    pub access_token_expiry: i64,

    /// Refresh token lifetime in seconds
    pub refresh_token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from("change-me-access-secret"),
            refresh_secret: String::from("change-me-refresh-secret"),
            access_token_expiry: 900,        // 15 minutes
            refresh_token_expiry: 2_592_000, // 30 days
        }
    }
}

impl JwtConfig {
    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86_400;
        self
    }

    /// Check whether either secret is still a placeholder default
    pub fn is_using_default_secrets(&self) -> bool {
        self.access_secret.starts_with("change-me") || self.refresh_secret.starts_with("change-me")
    }
}

/// CSRF token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CsrfConfig {
    /// Secret for signing CSRF tokens
    pub secret: String,

    /// CSRF token lifetime in seconds (minutes, not hours)
    pub token_expiry: i64,
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            secret: String::from("change-me-csrf-secret"),
            token_expiry: 120, // 2 minutes
        }
    }
}
