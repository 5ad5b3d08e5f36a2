//! Handlers for the `/test` echo endpoint.

use seqpack::query;
use tracing::info;
use warp::http::StatusCode;
use warp::reply::Reply;

use crate::api::models::echo::{EchoRequest, EchoResponse};
use crate::context::ServerContext;

/// Number of values written to the log for each request.
const LOGGED_VALUES: usize = 10;

/// Echo the delimited representation sent in the request body.
#[utoipa::path(
    post,
    operation_id = "echoDelimited",
    path = "/test",
    tag = "echo",
    request_body = EchoRequest,
    responses(
        (status = 200, description = "Summary of the identifiers; without `count` when there were none.", body = EchoResponse),
        (status = 400, description = "Invalid request body", body = crate::common::error::ErrorResponse),
        (status = 413, description = "Request body too large", body = crate::common::error::ErrorResponse),
    )
)]
pub async fn post_test(context: ServerContext, request: EchoRequest) -> impl Reply {
    let echo = &context.settings.echo;
    let values = query::values(&request.company_seqs, &echo.key);
    respond(&echo.key, values, Some(echo.preview_limit))
}

/// Echo the identifiers sent as repeated query parameters.
#[utoipa::path(
    get,
    operation_id = "echoQuery",
    path = "/test",
    tag = "echo",
    params(
        ("companySeq" = Option<Vec<String>>, Query, description = "Identifier; repeat the parameter for every value"),
    ),
    responses(
        (status = 200, description = "Summary of the identifiers; without `count` when there were none.", body = EchoResponse),
    )
)]
pub async fn get_test(context: ServerContext, raw_query: String) -> impl Reply {
    let key = &context.settings.echo.key;
    let values = query::values(&raw_query, key);
    respond(key, values, None)
}

fn respond(key: &str, values: Vec<String>, limit: Option<usize>) -> impl Reply {
    if !values.is_empty() {
        let logged = &values[..values.len().min(LOGGED_VALUES)];
        info!(count = values.len(), ?logged, "received {key} values");
    }

    let response = EchoResponse::summarize(key, values, limit);
    warp::reply::with_status(warp::reply::json(&response), StatusCode::OK)
}
