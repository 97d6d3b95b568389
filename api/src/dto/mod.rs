//! Request and response DTOs

pub mod auth;

pub use auth::{
    CsrfTokenRequest, CsrfTokenResponse, LoginRequest, RegisterRequest, TokenResponse,
    UserResponse,
};
