//! Handler for POST /api/auth/login

use actix_web::{web, HttpResponse};
use validator::Validate;

use warden_core::repositories::revocation::RevocationStore;
use warden_core::repositories::uow::UnitOfWork;
use warden_core::repositories::user::UserRepository;
use warden_shared::types::WebResponse;

use crate::dto::{LoginRequest, TokenResponse};
use crate::handlers::error::ApiError;
use crate::routes::AppState;

use super::refresh_token_cookie;

/// Authenticate with email and password.
///
/// On success the access token is returned in the body and the refresh
/// token is set as an HTTP-only cookie. Unknown emails and wrong passwords
/// produce the same 401.
pub async fn login<U, W, B>(
    state: web::Data<AppState<U, W, B>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    W: UnitOfWork + 'static,
    B: RevocationStore + 'static,
{
    request.validate()?;

    let pair = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;

    let cookie = refresh_token_cookie(&pair.refresh_token, state.refresh_cookie_ttl);
    Ok(HttpResponse::Ok().cookie(cookie).json(WebResponse::new(TokenResponse {
        access_token: pair.access_token,
    })))
}
