//! Route definitions for the echo server.

use std::time::Duration;

use crate::config::CorsConfig;
use crate::context::ServerContext;

use super::handlers;
use warp::Filter;

/// Echo routes.
mod echo;
/// Health routes.
mod health;

/// This function sets up the Warp filters for handling all requests.
pub fn routes(
    context: ServerContext,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    health::routes()
        .or(echo::routes(context))
        .or(openapi())
        // Wrap the reply in a tuple so callers can keep chaining filters.
        .map(|reply| (reply,))
}

/// Cross-origin policy for every route.
pub fn cors(config: &CorsConfig) -> warp::filters::cors::Builder {
    warp::cors()
        .allow_origins(config.allowed_origins.iter().map(String::as_str))
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_headers(vec!["Content-Type", "Authorization"])
        .expose_headers(vec!["Content-Length", "X-Requested-With"])
        .max_age(Duration::from_secs(config.max_age_secs))
        .allow_credentials(config.allow_credentials)
}

/// Serves the OpenAPI document.
fn openapi() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path!("api-docs" / "openapi.json")
        .and(warp::get())
        .map(|| warp::reply::json(&super::openapi::api_doc()))
}
