//! CORS middleware configuration for cross-origin requests.
//!
//! Origins, methods and headers come from [`CorsConfig`]; a `*` origin
//! switches to permissive mode, which is what development runs with.

use actix_cors::Cors;
use actix_web::http::{header::HeaderName, Method};
use shop_shared::config::CorsConfig;

/// Creates a CORS middleware instance from the configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default();

    if config.allows_any_origin() {
        log::info!("Configuring CORS to allow any origin");
        cors = cors.allow_any_origin();
    } else {
        log::info!("Configuring CORS for {} origin(s)", config.allowed_origins.len());
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| match Method::from_bytes(m.as_bytes()) {
            Ok(method) => Some(method),
            Err(_) => {
                log::warn!("Ignoring invalid CORS method: {}", m);
                None
            }
        })
        .collect();

    let headers: Vec<HeaderName> = config
        .allowed_headers
        .iter()
        .filter_map(|h| match HeaderName::from_bytes(h.as_bytes()) {
            Ok(name) => Some(name),
            Err(_) => {
                log::warn!("Ignoring invalid CORS header: {}", h);
                None
            }
        })
        .collect();

    cors = cors
        .allowed_methods(methods)
        .allowed_headers(headers)
        .max_age(config.max_age);

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
