//! Error-to-HTTP mapping.
//!
//! Semantic auth failures map to the 401/409 class. Store and database
//! failures are server errors: a request that could not be checked against
//! the revocation store is never reported as "not authenticated".

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::collections::HashMap;
use std::fmt;

use warden_core::errors::{AuthError, DomainError, TokenError};
use warden_shared::types::ErrorResponse;

/// API-level error wrapper rendered as an [`ErrorResponse`] body
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    Validation(validator::ValidationErrors),
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError::Domain(error)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Domain(error) => error.fmt(f),
            ApiError::Validation(_) => f.write_str("validation failed"),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Domain(error) => match error {
                DomainError::Auth(AuthError::AlreadyExists) => StatusCode::CONFLICT,
                DomainError::Auth(_) => StatusCode::UNAUTHORIZED,
                DomainError::Token(TokenError::SigningFailed) => StatusCode::INTERNAL_SERVER_ERROR,
                DomainError::Token(_) => StatusCode::UNAUTHORIZED,
                DomainError::Csrf(_) => StatusCode::UNAUTHORIZED,
                DomainError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
                DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
                DomainError::Database { .. }
                | DomainError::Configuration { .. }
                | DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let body = match self {
            ApiError::Domain(error) => ErrorResponse::new(error.to_string()),
            ApiError::Validation(errors) => {
                ErrorResponse::new("validation failed").with_field_errors(field_errors(errors))
            }
        };

        HttpResponse::build(status).json(body)
    }
}

fn field_errors(errors: &validator::ValidationErrors) -> HashMap<String, Vec<String>> {
    errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_core::errors::CsrfError;

    #[test]
    fn auth_failures_are_client_errors() {
        let err = ApiError::from(DomainError::Auth(AuthError::InvalidCredentials));
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);

        let err = ApiError::from(DomainError::Token(TokenError::Revoked));
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);

        let err = ApiError::from(DomainError::Csrf(CsrfError::AlreadyUsed));
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn duplicate_registration_is_a_conflict() {
        let err = ApiError::from(DomainError::Auth(AuthError::AlreadyExists));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn store_failures_are_server_errors_not_unauthorized() {
        let err = ApiError::from(DomainError::StoreUnavailable {
            message: "down".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let err = ApiError::from(DomainError::Token(TokenError::SigningFailed));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
