//! Top-level error type for the echo server

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use warp::http::StatusCode;
use warp::reject::Reject;
use warp::reply::{Reply, Response};

/// Errors surfaced to HTTP clients. An empty identifier list is not an
/// error; it is answered with a normal success response.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request body is not the expected JSON
    #[error("Invalid body: {0}")]
    InvalidBody(String),

    /// The body exceeds the configured limit
    #[error("Payload too large")]
    PayloadTooLarge,

    /// The request carries a body without a `Content-Length` header
    #[error("Content-Length required")]
    LengthRequired,

    /// No route matches the request path
    #[error("Resource not found")]
    NotFound,

    /// The path exists but not for this method
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Internal error
    #[error("Internal server error")]
    InternalServer,
}

impl Error {
    /// Provides the status code that corresponds to the error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Error::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Error::LengthRequired => StatusCode::LENGTH_REQUIRED,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::InternalServer => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Provides the error message that corresponds to the error.
    pub fn error_message(&self) -> String {
        self.to_string()
    }
}

/// Structure representing an error response
/// This is used to serialize error messages in HTTP responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// What went wrong.
    pub message: String,
}

impl Reject for Error {}

impl Reply for Error {
    fn into_response(self) -> Response {
        let json = warp::reply::json(&ErrorResponse {
            message: self.error_message(),
        });
        warp::reply::with_status(json, self.status_code()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Error::InvalidBody("x".into()), StatusCode::BAD_REQUEST)]
    #[test_case(Error::PayloadTooLarge, StatusCode::PAYLOAD_TOO_LARGE)]
    #[test_case(Error::LengthRequired, StatusCode::LENGTH_REQUIRED)]
    #[test_case(Error::NotFound, StatusCode::NOT_FOUND)]
    #[test_case(Error::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED)]
    #[test_case(Error::InternalServer, StatusCode::INTERNAL_SERVER_ERROR)]
    fn error_reply_carries_status(error: Error, status: StatusCode) {
        assert_eq!(error.into_response().status(), status);
    }
}
