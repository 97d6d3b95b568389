//! Route handlers and shared application state

pub mod auth;
pub mod csrf;

use std::sync::Arc;

use warden_core::repositories::revocation::RevocationStore;
use warden_core::repositories::uow::UnitOfWork;
use warden_core::repositories::user::UserRepository;
use warden_core::services::auth::AuthenticationService;
use warden_core::services::csrf::CsrfCodec;
use warden_core::services::token::TokenCodec;

/// Shared application state injected into every handler
pub struct AppState<U, W, B>
where
    U: UserRepository,
    W: UnitOfWork,
    B: RevocationStore,
{
    /// Authentication use cases
    pub auth_service: Arc<AuthenticationService<U, W, B>>,

    /// CSRF token minting and consumption
    pub csrf_codec: Arc<CsrfCodec<B>>,

    /// Token verification for the admission middleware
    pub token_codec: Arc<TokenCodec>,

    /// Revocation store shared with the middleware
    pub revocations: Arc<B>,

    /// Max-age for the refresh token cookie, in seconds
    pub refresh_cookie_ttl: i64,

    /// Allowed CORS origins (comma separated, `*` for any)
    pub cors_allow_origins: String,
}
