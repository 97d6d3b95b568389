//! Handler for POST /api/auth/logout

use actix_web::{web, HttpRequest, HttpResponse};

use warden_core::errors::{AuthError, DomainError};
use warden_core::repositories::revocation::RevocationStore;
use warden_core::repositories::uow::UnitOfWork;
use warden_core::repositories::user::UserRepository;
use warden_shared::types::WebResponse;

use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use super::{removal_cookie, REFRESH_TOKEN_COOKIE};

/// Revoke the session's access and refresh tokens.
///
/// Runs behind the admission gate, so the access token in `auth` is
/// already verified. Revocation is idempotent: if one of the two writes
/// fails the client just retries the logout.
pub async fn logout<U, W, B>(
    state: web::Data<AppState<U, W, B>>,
    request: HttpRequest,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    W: UnitOfWork + 'static,
    B: RevocationStore + 'static,
{
    let Some(cookie) = request.cookie(REFRESH_TOKEN_COOKIE) else {
        return Err(ApiError::from(DomainError::Auth(AuthError::MissingRefreshToken)));
    };

    state
        .auth_service
        .logout(&auth.token, cookie.value())
        .await?;

    let mut response = HttpResponse::Ok().json(WebResponse::new("logged out"));
    let _ = response.add_removal_cookie(&removal_cookie());
    Ok(response)
}
