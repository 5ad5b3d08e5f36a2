//! String codecs for the delimited representation.
//!
//! Every codec turns a delimited string into a URL-safe payload and back.
//! They share the [`Codec`] trait so that the selector can run them
//! polymorphically and the URL reader can pick one by its [`CodecTag`].

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::Error;

mod deflate;
mod lz4;

pub use deflate::DeflateCodec;
pub use lz4::Lz4Codec;

/// Identifies the codec that produced a payload. The string form is what
/// travels in the `method` URL parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecTag {
    /// Raw DEFLATE followed by URL-safe base64
    Deflate,
    /// LZ4 block (size prepended) followed by URL-safe base64
    Lz4,
}

impl CodecTag {
    /// All known tags in selector evaluation order.
    pub const ALL: [CodecTag; 2] = [CodecTag::Deflate, CodecTag::Lz4];

    /// The tag as it appears in a URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            CodecTag::Deflate => "deflate",
            CodecTag::Lz4 => "lz4",
        }
    }

    /// Returns the codec implementation for this tag.
    pub fn codec(&self) -> Box<dyn Codec> {
        match self {
            CodecTag::Deflate => Box::new(DeflateCodec::default()),
            CodecTag::Lz4 => Box::new(Lz4Codec),
        }
    }
}

impl fmt::Display for CodecTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodecTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CodecTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| Error::UnrecognizedCodecTag(s.to_string()))
    }
}

/// The capability set shared by every codec.
pub trait Codec: Send + Sync {
    /// Returns the tag written next to payloads produced by this codec.
    fn tag(&self) -> CodecTag;

    /// Compresses `input` into a URL-safe payload.
    fn compress(&self, input: &str) -> Result<String, CodecError>;

    /// Reverses [`Codec::compress`].
    fn decompress(&self, payload: &str) -> Result<String, CodecError>;
}

/// Errors that can occur inside a codec.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The payload is not valid unpadded URL-safe base64
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// I/O error from the DEFLATE stream
    #[error("deflate stream error: {0}")]
    Deflate(#[from] std::io::Error),

    /// The LZ4 block could not be decompressed
    #[error("lz4 block error: {0}")]
    Lz4(#[from] lz4_flex::block::DecompressError),

    /// Decompressed bytes are not UTF-8
    #[error("decompressed payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Plain text size exceeds [`crate::DECOMPRESSED_BYTES_LIMIT`]
    #[error("size limit exceeded: {0} bytes")]
    SizeLimit(u64),
}

fn to_text(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

fn from_text(payload: &str) -> Result<Vec<u8>, CodecError> {
    Ok(URL_SAFE_NO_PAD.decode(payload)?)
}
