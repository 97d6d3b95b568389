//! Admission middleware for protected routes.
//!
//! Every request runs the same linear check, short-circuiting on the first
//! failure: missing `Authorization` header, non-Bearer scheme, empty token,
//! revoked fingerprint, then full verification in the access domain. Each
//! failure maps to its own taxonomy value. A revocation-store failure is a
//! server error, never a 401: "could not check" must stay distinguishable
//! from "not authenticated".

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use warden_core::domain::entities::token::{Claims, TokenDomain};
use warden_core::errors::{AuthError, DomainError, TokenError};
use warden_core::repositories::revocation::{RevocationDomain, RevocationStore};
use warden_core::services::token::{fingerprint, TokenCodec};

use crate::handlers::error::ApiError;

const BEARER_PREFIX: &str = "Bearer ";

/// Authenticated identity injected into request extensions
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Subject id from the verified claims
    pub subject_id: String,

    /// The raw access token as presented (needed for logout revocation)
    pub token: String,

    /// The verified claims
    pub claims: Claims,
}

/// Admission middleware factory
pub struct AuthGate {
    codec: Arc<TokenCodec>,
    revocations: Arc<dyn RevocationStore>,
}

impl AuthGate {
    pub fn new(codec: Arc<TokenCodec>, revocations: Arc<dyn RevocationStore>) -> Self {
        Self { codec, revocations }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware {
            service: Rc::new(service),
            codec: Arc::clone(&self.codec),
            revocations: Arc::clone(&self.revocations),
        }))
    }
}

/// Admission middleware service
pub struct AuthGateMiddleware<S> {
    service: Rc<S>,
    codec: Arc<TokenCodec>,
    revocations: Arc<dyn RevocationStore>,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let codec = Arc::clone(&self.codec);
        let revocations = Arc::clone(&self.revocations);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Ok(token) => token,
                Err(err) => return Err(ApiError::from(err).into()),
            };

            // Revocation check before signature verification, failing
            // closed when the store cannot answer.
            match revocations
                .contains(&fingerprint(&token), RevocationDomain::Access)
                .await
            {
                Ok(false) => {}
                Ok(true) => {
                    return Err(ApiError::from(DomainError::Token(TokenError::Revoked)).into())
                }
                Err(store_error) => return Err(ApiError::from(store_error).into()),
            }

            let claims = match codec.verify(TokenDomain::Access, &token) {
                Ok(claims) => claims,
                Err(err) => return Err(ApiError::from(err).into()),
            };

            req.extensions_mut().insert(AuthContext {
                subject_id: claims.sub.clone(),
                token,
                claims,
            });

            service.call(req).await
        })
    }
}

/// Pull the bearer token out of the Authorization header, distinguishing
/// the three ways it can be absent.
fn extract_bearer_token(req: &ServiceRequest) -> Result<String, DomainError> {
    let header = match req.headers().get(AUTHORIZATION) {
        Some(header) => header,
        None => return Err(AuthError::MissingAuthorization.into()),
    };

    let header = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthScheme)?;

    let token = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthError::InvalidAuthScheme)?;

    if token.is_empty() {
        return Err(AuthError::MissingAccessToken.into());
    }

    Ok(token.to_string())
}

/// Extractor for the authenticated identity on gated routes
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("authentication required"));

        ready(result)
    }
}
