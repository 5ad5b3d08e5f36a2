#![deny(missing_docs)]

//! # seqpack
//!
//! Packs a long list of numeric identifiers into a single URL query
//! parameter and unpacks it again.
//!
//! ## Usage Example
//!
//! ```
//! use seqpack::selector::CodecSelector;
//! use seqpack::{query, url_state};
//!
//! let ids = vec![17, 3, 999, 3, 42];
//! let delimited = query::encode(query::DEFAULT_KEY, &ids);
//!
//! // Compress with every codec and keep the shortest payload.
//! let selection = CodecSelector::default().select(&delimited).unwrap();
//!
//! // Project the payload into the address bar and read it back.
//! let base = url::Url::parse("http://localhost:5173/").unwrap();
//! let url = url_state::write(&base, &selection.payload);
//! let restored = url_state::restore(&url).unwrap().unwrap();
//!
//! assert_eq!(restored, delimited);
//! assert_eq!(query::decode_ids(&restored, query::DEFAULT_KEY).unwrap(), ids);
//! ```
//!
//! ## Architecture
//!
//! * **ids**: Random identifier generation
//! * **query**: The `key=value&...` delimited representation
//! * **codec**: String codecs sharing the [`codec::Codec`] capability trait
//! * **selector**: Runs every codec and picks the smallest output
//! * **url_state**: Writes/reads the compressed payload to/from a URL
//! * **session**: Immutable client state driven by explicit actions
//! * **client**: HTTP client for the echo server

pub mod client;
pub mod codec;
pub mod error;
pub mod ids;
pub mod logging;
pub mod query;
pub mod selector;
pub mod session;
pub mod url_state;

pub use error::Error;

/// Maximum number of bytes a payload may expand to when decompressed
/// (1MB). Payloads come from an untrusted URL, so this bounds the memory
/// a single restore can allocate.
pub const DECOMPRESSED_BYTES_LIMIT: usize = 1 << 20; // 1MB = 2^20 bytes
