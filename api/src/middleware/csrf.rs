//! CSRF guard middleware.
//!
//! Consumes the `X-CSRF-Token` header against the request path. A token
//! that passes is revoked in the same step, so replaying it on a second
//! request fails with `AlreadyUsed`.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use warden_core::errors::{CsrfError, DomainError};
use warden_core::repositories::revocation::RevocationStore;
use warden_core::services::csrf::CsrfCodec;

use crate::handlers::error::ApiError;

const CSRF_HEADER: &str = "X-CSRF-Token";

/// CSRF guard middleware factory
pub struct CsrfGuard<B: RevocationStore> {
    codec: Arc<CsrfCodec<B>>,
}

impl<B: RevocationStore> CsrfGuard<B> {
    pub fn new(codec: Arc<CsrfCodec<B>>) -> Self {
        Self { codec }
    }
}

impl<S, Body, B> Transform<S, ServiceRequest> for CsrfGuard<B>
where
    S: Service<ServiceRequest, Response = ServiceResponse<Body>, Error = Error> + 'static,
    S::Future: 'static,
    Body: 'static,
    B: RevocationStore + 'static,
{
    type Response = ServiceResponse<Body>;
    type Error = Error;
    type InitError = ();
    type Transform = CsrfGuardMiddleware<S, B>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CsrfGuardMiddleware {
            service: Rc::new(service),
            codec: Arc::clone(&self.codec),
        }))
    }
}

/// CSRF guard middleware service
pub struct CsrfGuardMiddleware<S, B: RevocationStore> {
    service: Rc<S>,
    codec: Arc<CsrfCodec<B>>,
}

impl<S, Body, B> Service<ServiceRequest> for CsrfGuardMiddleware<S, B>
where
    S: Service<ServiceRequest, Response = ServiceResponse<Body>, Error = Error> + 'static,
    S::Future: 'static,
    Body: 'static,
    B: RevocationStore + 'static,
{
    type Response = ServiceResponse<Body>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let codec = Arc::clone(&self.codec);

        Box::pin(async move {
            let token = req
                .headers()
                .get(CSRF_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);

            let Some(token) = token else {
                return Err(ApiError::from(DomainError::Csrf(CsrfError::Missing)).into());
            };

            if let Err(err) = codec.consume(&token, req.path()).await {
                return Err(ApiError::from(err).into());
            }

            service.call(req).await
        })
    }
}
