//! Pluggable signing strategy.
//!
//! The codec signs through an injected strategy object rather than calling
//! the JWT library directly, so a failing signing primitive can be swapped
//! in per-instance without touching any global state.

use jsonwebtoken::{EncodingKey, Header};

use crate::errors::TokenError;

/// Strategy for producing a signed token from a serialized payload
pub trait SigningStrategy: Send + Sync {
    fn sign(
        &self,
        header: &Header,
        claims: &serde_json::Value,
        key: &EncodingKey,
    ) -> Result<String, TokenError>;
}

/// Default HMAC-SHA256 signer backed by `jsonwebtoken`
pub struct Hs256Signer;

impl SigningStrategy for Hs256Signer {
    fn sign(
        &self,
        header: &Header,
        claims: &serde_json::Value,
        key: &EncodingKey,
    ) -> Result<String, TokenError> {
        jsonwebtoken::encode(header, claims, key).map_err(|e| {
            tracing::error!(error = %e, "jwt encoding failed");
            TokenError::SigningFailed
        })
    }
}

/// Signer that always fails; used to exercise mint-failure paths in tests
pub struct FailingSigner;

impl SigningStrategy for FailingSigner {
    fn sign(
        &self,
        _header: &Header,
        _claims: &serde_json::Value,
        _key: &EncodingKey,
    ) -> Result<String, TokenError> {
        Err(TokenError::SigningFailed)
    }
}
