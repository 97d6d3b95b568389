//! Authentication routes.
//!
//! The refresh token travels exclusively in an HTTP-only, secure,
//! strict-same-site cookie scoped to the root path; the access token is
//! returned in the response body and presented back as a bearer header.

pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;

pub use login::login;
pub use logout::logout;
pub use refresh::refresh;
pub use register::register;

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};

pub(crate) const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// Cookie carrying a freshly minted refresh token
pub(crate) fn refresh_token_cookie(token: &str, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build(REFRESH_TOKEN_COOKIE, token.to_string())
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(CookieDuration::seconds(max_age_seconds))
        .finish()
}

/// Cookie template used to clear the refresh token from the client
pub(crate) fn removal_cookie() -> Cookie<'static> {
    Cookie::build(REFRESH_TOKEN_COOKIE, "").path("/").finish()
}
