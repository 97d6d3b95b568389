use base64::Engine;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::sync::Arc;

use crate::domain::entities::token::{Claims, TokenDomain};
use crate::errors::{DomainError, TokenError};
use crate::services::token::{fingerprint, FailingSigner, TokenCodec, TokenCodecConfig};

fn codec() -> TokenCodec {
    TokenCodec::new(TokenCodecConfig::new("access-secret", "refresh-secret")).unwrap()
}

fn token_error(result: Result<Claims, DomainError>) -> TokenError {
    match result {
        Err(DomainError::Token(err)) => err,
        other => panic!("expected token error, got {other:?}"),
    }
}

#[test]
fn minted_access_tokens_round_trip() {
    let codec = codec();
    let token = codec.mint(TokenDomain::Access, "user-42").unwrap();
    let claims = codec.verify(TokenDomain::Access, &token).unwrap();

    assert_eq!(claims.sub, "user-42");
    assert_eq!(claims.domain, TokenDomain::Access);
    assert!(claims.exp > claims.iat);
}

#[test]
fn minted_refresh_tokens_round_trip() {
    let codec = codec();
    let token = codec.mint(TokenDomain::Refresh, "user-42").unwrap();
    let claims = codec.verify(TokenDomain::Refresh, &token).unwrap();

    assert_eq!(claims.sub, "user-42");
    assert_eq!(claims.domain, TokenDomain::Refresh);
}

#[test]
fn access_token_is_rejected_as_refresh() {
    let codec = codec();
    let token = codec.mint(TokenDomain::Access, "user-42").unwrap();

    let err = token_error(codec.verify(TokenDomain::Refresh, &token));
    assert_eq!(err, TokenError::DomainMismatch);
}

#[test]
fn refresh_token_is_rejected_as_access() {
    let codec = codec();
    let token = codec.mint(TokenDomain::Refresh, "user-42").unwrap();

    let err = token_error(codec.verify(TokenDomain::Access, &token));
    assert_eq!(err, TokenError::DomainMismatch);
}

#[test]
fn domain_tag_is_checked_even_when_secrets_match() {
    // With identical secrets the cross-domain signature verifies, so only
    // the embedded tag stands between the two domains.
    let codec = TokenCodec::new(TokenCodecConfig::new("shared", "shared")).unwrap();
    let token = codec.mint(TokenDomain::Access, "user-42").unwrap();

    let err = token_error(codec.verify(TokenDomain::Refresh, &token));
    assert_eq!(err, TokenError::DomainMismatch);
}

#[test]
fn expired_tokens_are_rejected() {
    let codec = codec();

    let mut claims = Claims::new("user-42", TokenDomain::Access, chrono::Duration::minutes(15));
    claims.iat = Utc::now().timestamp() - 120;
    claims.exp = Utc::now().timestamp() - 60;
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"access-secret"),
    )
    .unwrap();

    let err = token_error(codec.verify(TokenDomain::Access, &token));
    assert_eq!(err, TokenError::Expired);
}

#[test]
fn non_hmac_algorithms_are_rejected() {
    let codec = codec();
    let b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD;

    let claims = Claims::new("user-42", TokenDomain::Access, chrono::Duration::minutes(15));
    let header = b64.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let payload = b64.encode(serde_json::to_vec(&claims).unwrap());
    let token = format!("{header}.{payload}.c2lnbmF0dXJl");

    let err = token_error(codec.verify(TokenDomain::Access, &token));
    assert_eq!(err, TokenError::WrongAlgorithm);
}

#[test]
fn garbage_input_is_malformed() {
    let codec = codec();
    let err = token_error(codec.verify(TokenDomain::Access, "not-a-token"));
    assert_eq!(err, TokenError::Malformed);
}

#[test]
fn tampered_signature_is_malformed() {
    let codec = codec();
    let token = codec.mint(TokenDomain::Access, "user-42").unwrap();
    let tampered = format!("{token}AAAA");

    let err = token_error(codec.verify(TokenDomain::Access, &tampered));
    assert_eq!(err, TokenError::Malformed);
}

#[test]
fn failing_signer_surfaces_signing_error() {
    let codec = TokenCodec::with_signer(
        TokenCodecConfig::new("access-secret", "refresh-secret"),
        Arc::new(FailingSigner),
    )
    .unwrap();

    let result = codec.mint(TokenDomain::Access, "user-42");
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::SigningFailed))
    ));
}

#[test]
fn empty_secrets_are_rejected_at_construction() {
    let result = TokenCodec::new(TokenCodecConfig::new("", "refresh-secret"));
    assert!(matches!(result, Err(DomainError::Configuration { .. })));
}

#[test]
fn access_lifetime_must_be_shorter_than_refresh() {
    let mut config = TokenCodecConfig::new("access-secret", "refresh-secret");
    config.access_ttl = config.refresh_ttl;

    let result = TokenCodec::new(config);
    assert!(matches!(result, Err(DomainError::Configuration { .. })));
}

#[test]
fn fingerprints_are_stable_and_token_specific() {
    let codec = codec();
    let a = codec.mint(TokenDomain::Access, "user-42").unwrap();
    let b = codec.mint(TokenDomain::Refresh, "user-42").unwrap();

    assert_eq!(fingerprint(&a), fingerprint(&a));
    assert_ne!(fingerprint(&a), fingerprint(&b));
    assert_eq!(fingerprint(&a).len(), 64);
    assert_ne!(fingerprint(&a), a);
}
