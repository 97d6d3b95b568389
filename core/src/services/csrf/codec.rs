//! CSRF codec implementation

use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use std::sync::Arc;

use crate::domain::entities::csrf::CsrfClaims;
use crate::errors::{CsrfError, DomainResult, TokenError};
use crate::repositories::revocation::{RevocationDomain, RevocationStore};
use crate::services::token::{fingerprint, Hs256Signer, SigningStrategy};

use super::config::CsrfCodecConfig;

/// Mints and consumes single-use, path-bound CSRF tokens.
pub struct CsrfCodec<B: RevocationStore> {
    config: CsrfCodecConfig,
    signer: Arc<dyn SigningStrategy>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    revocations: Arc<B>,
}

impl<B: RevocationStore> CsrfCodec<B> {
    /// Creates a codec with the default HMAC signer
    pub fn new(config: CsrfCodecConfig, revocations: Arc<B>) -> DomainResult<Self> {
        Self::with_signer(config, revocations, Arc::new(Hs256Signer))
    }

    /// Creates a codec with an injected signing strategy
    pub fn with_signer(
        config: CsrfCodecConfig,
        revocations: Arc<B>,
        signer: Arc<dyn SigningStrategy>,
    ) -> DomainResult<Self> {
        config.validate()?;

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.leeway = 0;

        Ok(Self {
            config,
            signer,
            encoding_key,
            decoding_key,
            validation,
            revocations,
        })
    }

    /// Mints a token bound to `path`.
    pub fn mint(&self, path: &str) -> DomainResult<String> {
        let claims = CsrfClaims::new(path, self.config.ttl(), nonce());
        let payload = serde_json::to_value(&claims).map_err(|e| {
            tracing::error!(error = %e, "csrf claims serialization failed");
            TokenError::SigningFailed
        })?;

        let token = self
            .signer
            .sign(&Header::new(Algorithm::HS256), &payload, &self.encoding_key)?;
        Ok(token)
    }

    /// Verifies a token for `request_path` and immediately revokes it.
    ///
    /// Ordering matters: signature and expiry first, then the path binding
    /// (`PathMismatch`), then the replay check (`AlreadyUsed`), then
    /// revocation with the remaining lifetime. A caller never observes a
    /// verified-but-unrevoked token.
    pub async fn consume(&self, token: &str, request_path: &str) -> DomainResult<CsrfClaims> {
        let claims = self.decode(token)?;

        if claims.path != request_path {
            return Err(CsrfError::PathMismatch.into());
        }

        let fingerprint = fingerprint(token);
        if self
            .revocations
            .contains(&fingerprint, RevocationDomain::Csrf)
            .await?
        {
            return Err(CsrfError::AlreadyUsed.into());
        }

        self.revocations
            .add(&fingerprint, RevocationDomain::Csrf, claims.remaining_lifetime())
            .await?;

        Ok(claims)
    }

    fn decode(&self, token: &str) -> DomainResult<CsrfClaims> {
        match decode::<CsrfClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => Err(match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidAlgorithm => TokenError::WrongAlgorithm,
                _ => TokenError::Malformed,
            }
            .into()),
        }
    }
}

fn nonce() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
