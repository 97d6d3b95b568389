//! Application factory
//!
//! Builds the actix-web application from an [`AppState`], wiring the
//! middleware and route tree.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, Error, HttpResponse};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use warden_core::repositories::revocation::RevocationStore;
use warden_core::repositories::uow::UnitOfWork;
use warden_core::repositories::user::UserRepository;

use crate::middleware::cors::create_cors;
use crate::middleware::{AuthGate, CsrfGuard};
use crate::routes::auth::{login, logout, refresh, register};
use crate::routes::csrf::mint_csrf_token;
use crate::routes::AppState;

/// Create and configure the application with all routes and middleware
pub fn create_app<U, W, B>(
    state: web::Data<AppState<U, W, B>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    W: UnitOfWork + 'static,
    B: RevocationStore + 'static,
{
    let cors = create_cors(&state.cors_allow_origins);

    let revocations: Arc<dyn RevocationStore> = state.revocations.clone();
    let auth_gate = AuthGate::new(Arc::clone(&state.token_codec), revocations);
    let csrf_guard = CsrfGuard::new(Arc::clone(&state.csrf_codec));

    App::new()
        .app_data(state.clone())
        .wrap(TracingLogger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route(
                            "/register",
                            web::post().to(register::<U, W, B>).wrap(csrf_guard),
                        )
                        .route("/login", web::post().to(login::<U, W, B>))
                        .route("/refresh-token", web::post().to(refresh::<U, W, B>))
                        .route(
                            "/logout",
                            web::post().to(logout::<U, W, B>).wrap(auth_gate),
                        ),
                )
                .route("/csrf-token", web::post().to(mint_csrf_token::<U, W, B>)),
        )
}

/// Liveness probe
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(warden_shared::types::WebResponse::new("ok"))
}
