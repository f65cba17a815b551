//! CORS policy for browser clients served from another origin.

use actix_cors::Cors;
use actix_web::http::{Method, header};

const MAX_AGE_SECONDS: usize = 3600;

fn allows_any_origin(origins: &[String]) -> bool {
    origins.len() == 1 && origins.first().is_some_and(|origin| origin == "*")
}

/// Build the CORS middleware for `origins`.
///
/// An empty list leaves cross-origin requests without CORS headers, so
/// browsers reject them. `["*"]` allows any origin.
pub fn build_cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::HeaderName::from_static(crate::domain::TRACE_ID_HEADER)])
        .max_age(MAX_AGE_SECONDS);

    if allows_any_origin(origins) {
        return cors.allow_any_origin();
    }
    origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
