//! # DEFLATE codec
//!
//! Compresses the delimited representation into a raw DEFLATE stream (no
//! zlib or gzip framing) and renders the stream as unpadded URL-safe base64.

use std::io::{Read, Write};

use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;

use super::{from_text, to_text, Codec, CodecError, CodecTag};
use crate::DECOMPRESSED_BYTES_LIMIT;

/// Raw DEFLATE followed by URL-safe base64.
#[derive(Debug, Clone, Copy)]
pub struct DeflateCodec {
    level: Compression,
}

impl DeflateCodec {
    /// Creates a codec with an explicit compression level (0-9).
    pub fn with_level(level: u32) -> Self {
        Self {
            level: Compression::new(level.min(9)),
        }
    }
}

impl Default for DeflateCodec {
    fn default() -> Self {
        Self {
            level: Compression::best(),
        }
    }
}

impl Codec for DeflateCodec {
    fn tag(&self) -> CodecTag {
        CodecTag::Deflate
    }

    fn compress(&self, input: &str) -> Result<String, CodecError> {
        let mut encoder = DeflateEncoder::new(Vec::new(), self.level);
        encoder.write_all(input.as_bytes())?;
        let compressed = encoder.finish()?;
        Ok(to_text(&compressed))
    }

    fn decompress(&self, payload: &str) -> Result<String, CodecError> {
        let compressed = from_text(payload)?;

        // Read one byte past the limit so that an oversized stream is
        // detected without inflating all of it.
        let limit = DECOMPRESSED_BYTES_LIMIT as u64;
        let mut decoded = Vec::new();
        DeflateDecoder::new(compressed.as_slice())
            .take(limit + 1)
            .read_to_end(&mut decoded)?;

        if decoded.len() as u64 > limit {
            return Err(CodecError::SizeLimit(decoded.len() as u64));
        }

        Ok(String::from_utf8(decoded)?)
    }
}
