//! Route configuration, request handlers and models for the echo server.

use warp::Filter;

use crate::context::ServerContext;

/// Request handlers.
pub mod handlers;
/// Request and response models.
pub mod models;
/// OpenAPI document.
pub mod openapi;
/// Route configuration.
pub mod routes;

/// The complete service: routes, JSON error recovery, CORS and request
/// logging.
pub fn service(
    context: ServerContext,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let cors = routes::cors(&context.settings.cors);

    routes::routes(context)
        .recover(handlers::handle_rejection)
        .with(cors)
        .with(warp::log("api"))
}
