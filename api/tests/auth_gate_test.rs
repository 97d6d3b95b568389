//! AuthGate middleware tests: every branch of the admission check.

use actix_web::{http::header, test, web, App, HttpResponse};
use async_trait::async_trait;
use chrono::Duration;
use std::sync::Arc;

use warden_api::middleware::{AuthContext, AuthGate};
use warden_core::domain::entities::token::TokenDomain;
use warden_core::errors::DomainError;
use warden_core::repositories::revocation::{
    InMemoryRevocationStore, RevocationDomain, RevocationStore,
};
use warden_core::services::token::{fingerprint, TokenCodec, TokenCodecConfig};
use warden_shared::types::ErrorResponse;

fn codec() -> Arc<TokenCodec> {
    Arc::new(TokenCodec::new(TokenCodecConfig::new("access-secret", "refresh-secret")).unwrap())
}

async fn whoami(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().body(auth.subject_id)
}

/// Store that can never be consulted
struct OfflineStore;

#[async_trait]
impl RevocationStore for OfflineStore {
    async fn add(
        &self,
        _fingerprint: &str,
        _domain: RevocationDomain,
        _ttl: Duration,
    ) -> Result<(), DomainError> {
        Err(DomainError::StoreUnavailable {
            message: "offline".to_string(),
        })
    }

    async fn contains(
        &self,
        _fingerprint: &str,
        _domain: RevocationDomain,
    ) -> Result<bool, DomainError> {
        Err(DomainError::StoreUnavailable {
            message: "offline".to_string(),
        })
    }
}

macro_rules! gate_app {
    ($codec:expr, $store:expr) => {
        test::init_service(
            App::new().route(
                "/me",
                web::get()
                    .to(whoami)
                    .wrap(AuthGate::new($codec, $store)),
            ),
        )
        .await
    };
}

#[actix_web::test]
async fn missing_header_is_rejected() {
    let app = gate_app!(codec(), Arc::new(InMemoryRevocationStore::new()));

    let request = test::TestRequest::get().uri("/me").to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 401);
    let body: ErrorResponse = test::read_body_json(response).await;
    assert_eq!(body.message, "authorization header is required");
}

#[actix_web::test]
async fn non_bearer_scheme_is_rejected() {
    let app = gate_app!(codec(), Arc::new(InMemoryRevocationStore::new()));

    let request = test::TestRequest::get()
        .uri("/me")
        .insert_header((header::AUTHORIZATION, "Token abc123"))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 401);
    let body: ErrorResponse = test::read_body_json(response).await;
    assert_eq!(body.message, "bearer scheme is required");
}

#[actix_web::test]
async fn empty_token_is_rejected() {
    let app = gate_app!(codec(), Arc::new(InMemoryRevocationStore::new()));

    let request = test::TestRequest::get()
        .uri("/me")
        .insert_header((header::AUTHORIZATION, "Bearer "))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 401);
    let body: ErrorResponse = test::read_body_json(response).await;
    assert_eq!(body.message, "access token is required");
}

#[actix_web::test]
async fn revoked_token_is_rejected() {
    let codec = codec();
    let store: Arc<dyn RevocationStore> = Arc::new(InMemoryRevocationStore::new());
    let token = codec.mint(TokenDomain::Access, "user-1").unwrap();
    store
        .add(&fingerprint(&token), RevocationDomain::Access, Duration::hours(1))
        .await
        .unwrap();

    let app = gate_app!(Arc::clone(&codec), Arc::clone(&store));

    let request = test::TestRequest::get()
        .uri("/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 401);
    let body: ErrorResponse = test::read_body_json(response).await;
    assert_eq!(body.message, "token revoked");
}

#[actix_web::test]
async fn malformed_token_is_rejected() {
    let app = gate_app!(codec(), Arc::new(InMemoryRevocationStore::new()));

    let request = test::TestRequest::get()
        .uri("/me")
        .insert_header((header::AUTHORIZATION, "Bearer not-a-jwt"))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 401);
    let body: ErrorResponse = test::read_body_json(response).await;
    assert_eq!(body.message, "malformed token");
}

#[actix_web::test]
async fn refresh_token_cannot_pass_the_gate() {
    let codec = codec();
    let token = codec.mint(TokenDomain::Refresh, "user-1").unwrap();

    let app = gate_app!(Arc::clone(&codec), Arc::new(InMemoryRevocationStore::new()));

    let request = test::TestRequest::get()
        .uri("/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 401);
    let body: ErrorResponse = test::read_body_json(response).await;
    assert_eq!(body.message, "token presented for the wrong domain");
}

#[actix_web::test]
async fn valid_token_reaches_the_handler_with_its_identity() {
    let codec = codec();
    let token = codec.mint(TokenDomain::Access, "user-42").unwrap();

    let app = gate_app!(Arc::clone(&codec), Arc::new(InMemoryRevocationStore::new()));

    let request = test::TestRequest::get()
        .uri("/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 200);
    let body = test::read_body(response).await;
    assert_eq!(body, "user-42");
}

#[actix_web::test]
async fn store_outage_is_a_server_error_not_unauthorized() {
    let codec = codec();
    let token = codec.mint(TokenDomain::Access, "user-1").unwrap();

    let app = gate_app!(Arc::clone(&codec), Arc::new(OfflineStore));

    let request = test::TestRequest::get()
        .uri("/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 503);
}
