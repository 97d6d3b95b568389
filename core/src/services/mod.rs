//! Business services

pub mod auth;
pub mod csrf;
pub mod token;

pub use auth::AuthenticationService;
pub use csrf::CsrfCodec;
pub use token::{fingerprint, TokenCodec};
