//! Domain-specific error types.
//!
//! Semantic authentication failures (bad credentials, expired or revoked
//! tokens) are client errors and terminal for the request; store and
//! database connectivity failures are server errors and must stay
//! distinguishable from "not authenticated" so callers can fail closed.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("user already exists")]
    AlreadyExists,

    #[error("authorization header is required")]
    MissingAuthorization,

    #[error("bearer scheme is required")]
    InvalidAuthScheme,

    #[error("access token is required")]
    MissingAccessToken,

    #[error("refresh token is required")]
    MissingRefreshToken,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,

    #[error("token expired")]
    Expired,

    #[error("unexpected signing algorithm")]
    WrongAlgorithm,

    #[error("token presented for the wrong domain")]
    DomainMismatch,

    #[error("token revoked")]
    Revoked,

    #[error("token signing failed")]
    SigningFailed,
}

/// CSRF-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CsrfError {
    #[error("csrf token is required")]
    Missing,

    #[error("csrf token is not valid for this path")]
    PathMismatch,

    #[error("csrf token already used")]
    AlreadyUsed,
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Csrf(#[from] CsrfError),

    /// The revocation store could not be reached; security-sensitive
    /// callers must treat this as a denial, not as "not revoked".
    #[error("revocation store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("database error: {message}")]
    Database { message: String },

    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
