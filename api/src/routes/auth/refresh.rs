//! Handler for POST /api/auth/refresh-token

use actix_web::{web, HttpRequest, HttpResponse, ResponseError};

use warden_core::errors::{AuthError, DomainError};
use warden_core::repositories::revocation::RevocationStore;
use warden_core::repositories::uow::UnitOfWork;
use warden_core::repositories::user::UserRepository;
use warden_shared::types::WebResponse;

use crate::dto::TokenResponse;
use crate::handlers::error::ApiError;
use crate::routes::AppState;

use super::{refresh_token_cookie, removal_cookie, REFRESH_TOKEN_COOKIE};

/// Rotate the refresh token from its cookie and mint a new access token.
///
/// A refresh token the service rejects is also cleared from the client, so
/// a stolen-cookie replay cannot keep resubmitting itself; store outages
/// (5xx) leave the cookie in place for a later retry.
pub async fn refresh<U, W, B>(
    state: web::Data<AppState<U, W, B>>,
    request: HttpRequest,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    W: UnitOfWork + 'static,
    B: RevocationStore + 'static,
{
    let Some(cookie) = request.cookie(REFRESH_TOKEN_COOKIE) else {
        return Err(ApiError::from(DomainError::Auth(AuthError::MissingRefreshToken)));
    };

    match state.auth_service.refresh_token(cookie.value()).await {
        Ok(pair) => {
            let cookie = refresh_token_cookie(&pair.refresh_token, state.refresh_cookie_ttl);
            Ok(HttpResponse::Ok().cookie(cookie).json(WebResponse::new(TokenResponse {
                access_token: pair.access_token,
            })))
        }
        Err(err) => {
            let api_error = ApiError::from(err);
            let mut response = api_error.error_response();
            if response.status().is_client_error() {
                let _ = response.add_removal_cookie(&removal_cookie());
            }
            Ok(response)
        }
    }
}
