//! LZ4 codec: block compression with the uncompressed size prepended as a
//! little-endian `u32`, rendered as unpadded URL-safe base64.

use super::{from_text, to_text, Codec, CodecError, CodecTag};
use crate::DECOMPRESSED_BYTES_LIMIT;

/// Number of bytes used by the prepended size header.
const SIZE_HEADER_LEN: usize = 4;

/// LZ4 block followed by URL-safe base64.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz4Codec;

impl Codec for Lz4Codec {
    fn tag(&self) -> CodecTag {
        CodecTag::Lz4
    }

    fn compress(&self, input: &str) -> Result<String, CodecError> {
        Ok(to_text(&lz4_flex::compress_prepend_size(input.as_bytes())))
    }

    fn decompress(&self, payload: &str) -> Result<String, CodecError> {
        let compressed = from_text(payload)?;

        // The size header drives the output allocation, check it before
        // handing the block to the decompressor.
        if let Some(header) = compressed.get(..SIZE_HEADER_LEN) {
            let mut size = [0u8; SIZE_HEADER_LEN];
            size.copy_from_slice(header);
            let size = u32::from_le_bytes(size) as u64;
            if size > DECOMPRESSED_BYTES_LIMIT as u64 {
                return Err(CodecError::SizeLimit(size));
            }
        }

        let decoded = lz4_flex::decompress_size_prepended(&compressed)?;
        Ok(String::from_utf8(decoded)?)
    }
}
