//! Route definitions for the health and index endpoints.

use super::handlers;
use warp::Filter;

/// Health routes.
pub fn routes() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    get_health().or(get_index())
}

/// Get health endpoint.
fn get_health() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .then(handlers::health::get_health)
}

/// Root greeting.
fn get_index() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path::end()
        .and(warp::get())
        .then(handlers::health::get_index)
}
