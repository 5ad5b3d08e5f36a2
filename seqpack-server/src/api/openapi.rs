//! OpenAPI document for the echo server.

use utoipa::OpenApi;

use super::handlers;
use super::models;
use crate::common::error::ErrorResponse;

/// Generated OpenAPI description of every endpoint.
#[derive(utoipa::OpenApi)]
#[openapi(
    info(title = "seqpack echo server"),
    paths(
        handlers::health::get_health,
        handlers::echo::post_test,
        handlers::echo::get_test,
    ),
    components(schemas(
        models::health::HealthData,
        models::echo::EchoRequest,
        models::echo::EchoResponse,
        ErrorResponse,
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "echo", description = "Identifier echo"),
    )
)]
pub struct ApiDoc;

/// Builds the OpenAPI document.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
