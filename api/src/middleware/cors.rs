//! CORS middleware configuration for cross-origin requests.
//!
//! Development allows any origin so a locally served front-end can reach the
//! API. Production only allows the origins listed in `ALLOWED_ORIGINS`.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use sb_shared::config::{Environment, ServerConfig};

/// Max age for the preflight cache, in seconds
const PREFLIGHT_MAX_AGE: usize = 3600;

/// Creates a CORS middleware instance configured for `environment`.
pub fn create_cors(server: &ServerConfig, environment: Environment) -> Cors {
    if environment.is_production() {
        create_production_cors(&server.allowed_origins)
    } else {
        create_development_cors()
    }
}

fn allowed_methods() -> Vec<Method> {
    vec![
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ]
}

fn create_development_cors() -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::CACHE_CONTROL,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(PREFLIGHT_MAX_AGE)
}

fn create_production_cors(allowed_origins: &[String]) -> Cors {
    log::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(PREFLIGHT_MAX_AGE);

    for origin in allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    if allowed_origins.is_empty() {
        log::warn!("ALLOWED_ORIGINS is empty; cross-origin requests will be refused");
    }

    cors
}
