//! Top-level error type for the seqpack library

use crate::codec::CodecError;

/// Errors occurring while packing identifiers into a URL, restoring them,
/// or talking to the echo server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A codec failed to compress or decompress a payload
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// The selector was built without any codec to try
    #[error("no codecs registered")]
    NoCodecs,

    /// The `method` parameter names a codec that this build does not know
    #[error("unrecognized codec tag: {0:?}")]
    UnrecognizedCodecTag(String),

    /// Only one of the two URL state parameters was present
    #[error("incomplete URL state, missing parameter: {0}")]
    MissingUrlParameter(&'static str),

    /// A value in the delimited representation is not a positive integer
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// The URL could not be parsed
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport error talking to the echo server
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The echo server answered with a non-success status
    #[error("echo server responded with status code {0}: {1}")]
    EchoStatus(reqwest::StatusCode, String),
}
