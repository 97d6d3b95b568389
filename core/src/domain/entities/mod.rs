//! Entity definitions

pub mod csrf;
pub mod token;
pub mod user;

pub use csrf::CsrfClaims;
pub use token::{Claims, TokenDomain, TokenPair};
pub use user::User;
