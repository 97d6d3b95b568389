//! Request middleware

pub mod auth;
pub mod cors;
pub mod csrf;

pub use auth::{AuthContext, AuthGate};
pub use csrf::CsrfGuard;
