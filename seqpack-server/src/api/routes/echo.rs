//! Route definitions for the `/test` echo endpoint.

use crate::context::ServerContext;

use super::handlers;
use warp::Filter;

/// Echo routes.
pub fn routes(
    context: ServerContext,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    post_test(context.clone()).or(get_test(context))
}

/// Echo the delimited representation in a JSON body.
fn post_test(
    context: ServerContext,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let body_limit = context.settings.server.body_limit_bytes;

    warp::path("test")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::any().map(move || context.clone()))
        .and(warp::body::content_length_limit(body_limit))
        .and(warp::body::json())
        .then(handlers::echo::post_test)
}

/// Echo repeated `companySeq` query parameters.
fn get_test(
    context: ServerContext,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // `query::raw` rejects requests without a query string; treat those as empty.
    let raw_query = warp::query::raw()
        .or(warp::any().map(String::new))
        .unify();

    warp::path("test")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::any().map(move || context.clone()))
        .and(raw_query)
        .then(handlers::echo::get_test)
}
