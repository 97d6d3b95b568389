//! Handler for POST /api/csrf-token

use actix_web::{web, HttpResponse};
use validator::Validate;

use warden_core::repositories::revocation::RevocationStore;
use warden_core::repositories::uow::UnitOfWork;
use warden_core::repositories::user::UserRepository;
use warden_shared::types::WebResponse;

use crate::dto::{CsrfTokenRequest, CsrfTokenResponse};
use crate::handlers::error::ApiError;
use crate::routes::AppState;

/// Mint a single-use CSRF token bound to the requested path.
pub async fn mint_csrf_token<U, W, B>(
    state: web::Data<AppState<U, W, B>>,
    request: web::Json<CsrfTokenRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    W: UnitOfWork + 'static,
    B: RevocationStore + 'static,
{
    request.validate()?;

    let token = state.csrf_codec.mint(&request.path)?;
    Ok(HttpResponse::Ok().json(WebResponse::new(CsrfTokenResponse { csrf_token: token })))
}
