//! Cross-origin policy for browser clients.
//!
//! The bundled web frontend is served from another origin and calls both
//! `/graphql` and `/api/reservations`, so every origin is accepted and the
//! response carries a wildcard `Access-Control-Allow-Origin`.

use actix_cors::Cors;

const PREFLIGHT_MAX_AGE_SECS: usize = 3600;

/// Allow any origin, method and header without credentials.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use hotel_backend::middleware::any_origin_cors;
///
/// let app = App::new().wrap(any_origin_cors());
/// ```
#[must_use]
pub fn any_origin_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(PREFLIGHT_MAX_AGE_SECS)
}
