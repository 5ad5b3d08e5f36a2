//! Codec selection: compress with every registered codec and keep the
//! shortest payload.

use serde::Serialize;
use tracing::debug;

use crate::codec::{Codec, CodecError, CodecTag, DeflateCodec, Lz4Codec};
use crate::error::Error;
use crate::DECOMPRESSED_BYTES_LIMIT;

/// A payload together with the tag of the codec that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompressedPayload {
    /// URL-safe compressed text.
    pub payload: String,
    /// Codec that must be used to decompress `payload`.
    pub codec: CodecTag,
}

impl CompressedPayload {
    /// Decompresses the payload with its tagged codec.
    pub fn decompress(&self) -> Result<String, Error> {
        Ok(self.codec.codec().decompress(&self.payload)?)
    }
}

/// Encoded length produced by a single codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EncodedLength {
    /// Codec that was tried.
    pub codec: CodecTag,
    /// Length of its payload in bytes.
    pub length: usize,
}

/// Size measurements from one selection run. Display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompressionStats {
    /// Length of the delimited representation.
    pub original_length: usize,
    /// Payload length for every codec, in evaluation order.
    pub encoded: Vec<EncodedLength>,
    /// The codec whose payload was kept.
    pub selected: CodecTag,
}

impl CompressionStats {
    /// Payload length produced by `codec`, if it was tried.
    pub fn length_of(&self, codec: CodecTag) -> Option<usize> {
        self.encoded
            .iter()
            .find(|entry| entry.codec == codec)
            .map(|entry| entry.length)
    }

    /// Selected payload length as a fraction of the original length.
    pub fn ratio(&self) -> f64 {
        match (self.length_of(self.selected), self.original_length) {
            (Some(_), 0) | (None, _) => 1.0,
            (Some(length), original) => length as f64 / original as f64,
        }
    }
}

/// Result of [`CodecSelector::select`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// The smallest payload.
    pub payload: CompressedPayload,
    /// Measurements for every codec tried.
    pub stats: CompressionStats,
}

/// Holds the codecs to try, in evaluation order.
pub struct CodecSelector {
    codecs: Vec<Box<dyn Codec>>,
}

impl Default for CodecSelector {
    /// DEFLATE first, then LZ4.
    fn default() -> Self {
        Self::new(vec![Box::new(DeflateCodec::default()), Box::new(Lz4Codec)])
    }
}

impl CodecSelector {
    /// Creates a selector over `codecs`. Order matters: on equal payload
    /// lengths the codec that comes first wins.
    pub fn new(codecs: Vec<Box<dyn Codec>>) -> Self {
        Self { codecs }
    }

    /// Compresses `delimited` with every codec and returns the shortest
    /// payload. The first codec error aborts the selection.
    ///
    /// Input longer than [`DECOMPRESSED_BYTES_LIMIT`] is rejected, since no
    /// codec would decompress it again.
    #[tracing::instrument(skip_all, fields(input_len = delimited.len()))]
    pub fn select(&self, delimited: &str) -> Result<Selection, Error> {
        if delimited.len() > DECOMPRESSED_BYTES_LIMIT {
            return Err(CodecError::SizeLimit(delimited.len() as u64).into());
        }

        let mut encoded = Vec::with_capacity(self.codecs.len());
        let mut best: Option<CompressedPayload> = None;

        for codec in &self.codecs {
            let payload = codec.compress(delimited)?;
            debug!(codec = %codec.tag(), length = payload.len(), "codec output measured");

            encoded.push(EncodedLength {
                codec: codec.tag(),
                length: payload.len(),
            });

            // Strictly smaller: the first codec wins ties.
            let is_better = best
                .as_ref()
                .map_or(true, |current| payload.len() < current.payload.len());
            if is_better {
                best = Some(CompressedPayload {
                    payload,
                    codec: codec.tag(),
                });
            }
        }

        let payload = best.ok_or(Error::NoCodecs)?;
        let stats = CompressionStats {
            original_length: delimited.len(),
            encoded,
            selected: payload.codec,
        };

        Ok(Selection { payload, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{self, GeneratorConfig};
    use crate::query;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use test_case::test_case;

    /// A codec with a fixed output, used to drive the selection logic.
    struct FixedCodec {
        tag: CodecTag,
        output: &'static str,
    }

    impl Codec for FixedCodec {
        fn tag(&self) -> CodecTag {
            self.tag
        }
        fn compress(&self, _: &str) -> Result<String, CodecError> {
            Ok(self.output.to_string())
        }
        fn decompress(&self, _: &str) -> Result<String, CodecError> {
            Ok(String::new())
        }
    }

    struct FailingCodec;

    impl Codec for FailingCodec {
        fn tag(&self) -> CodecTag {
            CodecTag::Lz4
        }
        fn compress(&self, _: &str) -> Result<String, CodecError> {
            Err(CodecError::SizeLimit(0))
        }
        fn decompress(&self, _: &str) -> Result<String, CodecError> {
            Err(CodecError::SizeLimit(0))
        }
    }

    fn fixed(first: &'static str, second: &'static str) -> CodecSelector {
        CodecSelector::new(vec![
            Box::new(FixedCodec {
                tag: CodecTag::Deflate,
                output: first,
            }),
            Box::new(FixedCodec {
                tag: CodecTag::Lz4,
                output: second,
            }),
        ])
    }

    #[test_case("aa", "aaa", CodecTag::Deflate; "first shorter")]
    #[test_case("aaa", "aa", CodecTag::Lz4; "second shorter")]
    #[test_case("aa", "bb", CodecTag::Deflate; "tie goes to first")]
    fn selects_shortest(first: &'static str, second: &'static str, expected: CodecTag) {
        let selection = fixed(first, second).select("input").unwrap();

        assert_eq!(selection.payload.codec, expected);
        assert_eq!(selection.stats.selected, expected);
        assert_eq!(selection.stats.original_length, 5);
        assert_eq!(selection.stats.length_of(CodecTag::Deflate), Some(first.len()));
        assert_eq!(selection.stats.length_of(CodecTag::Lz4), Some(second.len()));
    }

    #[test]
    fn codec_error_aborts_selection() {
        let selector = CodecSelector::new(vec![Box::new(DeflateCodec::default()), Box::new(FailingCodec)]);
        let err = selector.select("companySeq=1").unwrap_err();
        assert!(matches!(err, Error::Codec(CodecError::SizeLimit(0))));
    }

    #[test]
    fn empty_selector_is_an_error() {
        let err = CodecSelector::new(Vec::new()).select("companySeq=1").unwrap_err();
        assert!(matches!(err, Error::NoCodecs));
    }

    #[test]
    fn input_at_the_limit_is_accepted() {
        let input = "a".repeat(DECOMPRESSED_BYTES_LIMIT);
        let selection = CodecSelector::default().select(&input).unwrap();
        assert_eq!(selection.payload.decompress().unwrap(), input);
    }

    #[test]
    fn input_over_the_limit_is_rejected() {
        let input = "a".repeat(DECOMPRESSED_BYTES_LIMIT + 1);
        match CodecSelector::default().select(&input) {
            Err(Error::Codec(CodecError::SizeLimit(len))) => {
                assert_eq!(len, DECOMPRESSED_BYTES_LIMIT as u64 + 1)
            }
            other => panic!("expected size limit error, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_round_trips() {
        let selection = CodecSelector::default().select("").unwrap();
        assert_eq!(selection.payload.decompress().unwrap(), "");
        assert_eq!(selection.stats.ratio(), 1.0);
    }

    #[test]
    fn realistic_input_compresses() {
        let mut rng = StdRng::seed_from_u64(2000);
        let ids = ids::generate(&mut rng, GeneratorConfig::default());
        let delimited = query::encode(query::DEFAULT_KEY, &ids);

        let selection = CodecSelector::default().select(&delimited).unwrap();
        assert!(selection.stats.ratio() < 1.0);
        assert_eq!(selection.payload.decompress().unwrap(), delimited);
    }

    proptest! {
        #[test]
        fn selected_payload_round_trips(ids in prop::collection::vec(1..10_000u64, 0..3000)) {
            let delimited = query::encode(query::DEFAULT_KEY, &ids);
            let selection = CodecSelector::default().select(&delimited).unwrap();

            prop_assert_eq!(selection.payload.decompress().unwrap(), delimited);
        }

        #[test]
        fn selected_length_is_minimum(ids in prop::collection::vec(1..1_000u64, 0..500)) {
            let delimited = query::encode(query::DEFAULT_KEY, &ids);
            let selection = CodecSelector::default().select(&delimited).unwrap();

            let min = selection.stats.encoded.iter().map(|e| e.length).min().unwrap();
            let first_min = selection.stats.encoded.iter().find(|e| e.length == min).unwrap();
            prop_assert_eq!(selection.payload.payload.len(), min);
            prop_assert_eq!(selection.payload.codec, first_min.codec);
        }
    }
}
