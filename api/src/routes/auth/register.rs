//! Handler for POST /api/auth/register

use actix_web::{web, HttpResponse};
use validator::Validate;

use warden_core::repositories::revocation::RevocationStore;
use warden_core::repositories::uow::UnitOfWork;
use warden_core::repositories::user::UserRepository;
use warden_shared::types::WebResponse;

use crate::dto::{RegisterRequest, UserResponse};
use crate::handlers::error::ApiError;
use crate::routes::AppState;

/// Register a new user.
///
/// The whole write path runs inside one transaction; a duplicate email is
/// a 409.
pub async fn register<U, W, B>(
    state: web::Data<AppState<U, W, B>>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    W: UnitOfWork + 'static,
    B: RevocationStore + 'static,
{
    request.validate()?;

    let user = state
        .auth_service
        .register(&request.email, &request.password, &request.name)
        .await?;

    Ok(HttpResponse::Ok().json(WebResponse::new(UserResponse::from(user))))
}
