//! Handlers for the health endpoint.

use crate::api::models::health::HealthData;

/// Get health handler.
#[utoipa::path(
    get,
    operation_id = "checkHealth",
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "The server is up.", body = HealthData),
        (status = 405, description = "Method not allowed", body = crate::common::error::ErrorResponse),
    )
)]
pub async fn get_health() -> impl warp::reply::Reply {
    warp::reply::json(&HealthData::ok())
}

/// Greeting served at the root path.
pub async fn get_index() -> impl warp::reply::Reply {
    "Hello from seqpack!"
}
