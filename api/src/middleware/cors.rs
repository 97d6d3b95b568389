//! CORS configuration

use actix_cors::Cors;
use actix_web::http::header;

/// Build the CORS middleware from the configured origin list.
///
/// `*` allows any origin (without credentials, which CORS forbids for
/// wildcard origins); otherwise origins are matched exactly against the
/// comma-separated allow list and credentialed requests are permitted so
/// the refresh cookie can travel.
pub fn create_cors(allow_origins: &str) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .allowed_header("X-CSRF-Token")
        .max_age(3600);

    if allow_origins.trim() == "*" {
        return cors.allow_any_origin();
    }

    allow_origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .fold(cors.supports_credentials(), |cors, origin| {
            cors.allowed_origin(origin)
        })
}
