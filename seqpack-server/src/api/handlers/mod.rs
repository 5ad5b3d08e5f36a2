//! Handlers for the echo server API

use crate::common::error::Error;

use std::convert::Infallible;
use tracing::{debug, error};
use warp::{Rejection, Reply};

/// Echo handlers.
pub mod echo;
/// Health handlers.
pub mod health;

/// Central error handler for Warp rejections, converting them to JSON
/// responses with the appropriate HTTP status.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let error = if err.is_not_found() {
        Error::NotFound
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        debug!("rejected request body: {e}");
        Error::InvalidBody(e.to_string())
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        Error::PayloadTooLarge
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        Error::LengthRequired
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        Error::MethodNotAllowed
    } else if let Some(e) = err.find::<Error>() {
        error!("unhandled application error: {e:?}");
        Error::InternalServer
    } else {
        error!("unhandled error: {err:?}");
        Error::InternalServer
    };

    Ok(error)
}
