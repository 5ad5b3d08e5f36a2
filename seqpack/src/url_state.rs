//! Projects a compressed payload into a URL and reads it back.
//!
//! The final form of the query is exactly two parameters:
//!
//! ```text
//! ?q=<payload>&method=<codec-tag>
//! ```
//!
//! Older links carry the identifiers uncompressed as repeated
//! `companySeq=<id>` pairs; [`read`] still recognises that form.

use url::form_urlencoded;
use url::Url;

use crate::codec::CodecTag;
use crate::error::Error;
use crate::query;
use crate::selector::CompressedPayload;

/// Query parameter holding the compressed payload.
pub const PAYLOAD_PARAM: &str = "q";

/// Query parameter holding the codec tag.
pub const METHOD_PARAM: &str = "method";

/// State recovered from a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlSnapshot {
    /// `q` + `method` form.
    Compressed(CompressedPayload),
    /// Legacy form: the delimited representation rebuilt from repeated
    /// `companySeq` pairs.
    Raw(String),
}

impl UrlSnapshot {
    /// Returns the delimited representation, decompressing if needed.
    pub fn into_delimited(self) -> Result<String, Error> {
        match self {
            UrlSnapshot::Compressed(payload) => payload.decompress(),
            UrlSnapshot::Raw(delimited) => Ok(delimited),
        }
    }
}

/// Returns `base` with its query replaced by the payload and codec tag.
/// Path and fragment are kept.
pub fn write(base: &Url, payload: &CompressedPayload) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    url.query_pairs_mut()
        .append_pair(PAYLOAD_PARAM, &payload.payload)
        .append_pair(METHOD_PARAM, payload.codec.as_str());
    url
}

/// Returns `base` with its query replaced by the uncompressed identifiers.
/// An empty identifier list clears the query.
pub fn write_raw(base: &Url, ids: &[u64]) -> Url {
    let mut url = base.clone();
    let delimited = query::encode(query::DEFAULT_KEY, ids);
    url.set_query((!delimited.is_empty()).then_some(delimited.as_str()));
    url
}

/// Returns `base` without any query.
pub fn clear(base: &Url) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    url
}

/// Reads the URL state.
///
/// * Neither `q` nor `method` present: the legacy `companySeq` form if any
///   such pair exists, otherwise `Ok(None)`.
/// * Only one of them present: [`Error::MissingUrlParameter`].
/// * `method` naming an unknown codec: [`Error::UnrecognizedCodecTag`].
pub fn read(url: &Url) -> Result<Option<UrlSnapshot>, Error> {
    let mut payload = None;
    let mut method = None;
    let mut raw = form_urlencoded::Serializer::new(String::new());
    let mut has_raw = false;

    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            PAYLOAD_PARAM if payload.is_none() => payload = Some(value.into_owned()),
            METHOD_PARAM if method.is_none() => method = Some(value.into_owned()),
            query::DEFAULT_KEY => {
                raw.append_pair(query::DEFAULT_KEY, &value);
                has_raw = true;
            }
            _ => {}
        }
    }

    match (payload, method) {
        (Some(payload), Some(method)) => {
            let codec: CodecTag = method.parse()?;
            Ok(Some(UrlSnapshot::Compressed(CompressedPayload { payload, codec })))
        }
        (Some(_), None) => Err(Error::MissingUrlParameter(METHOD_PARAM)),
        (None, Some(_)) => Err(Error::MissingUrlParameter(PAYLOAD_PARAM)),
        (None, None) if has_raw => Ok(Some(UrlSnapshot::Raw(raw.finish()))),
        (None, None) => Ok(None),
    }
}

/// Reads the URL state and returns the delimited representation.
pub fn restore(url: &Url) -> Result<Option<String>, Error> {
    read(url)?.map(UrlSnapshot::into_delimited).transpose()
}

/// The address bar: the current URL plus the number of history entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    current: Url,
    history_len: usize,
}

impl Location {
    /// A fresh navigation to `url`.
    pub fn new(url: Url) -> Self {
        Self {
            current: url,
            history_len: 1,
        }
    }

    /// The current URL.
    pub fn current(&self) -> &Url {
        &self.current
    }

    /// Number of history entries.
    pub fn history_len(&self) -> usize {
        self.history_len
    }

    /// Swaps the current URL without adding a history entry.
    pub fn replace(&self, url: Url) -> Self {
        Self {
            current: url,
            history_len: self.history_len,
        }
    }

    /// Navigates to `url`, adding a history entry.
    pub fn push(&self, url: Url) -> Self {
        Self {
            current: url,
            history_len: self.history_len + 1,
        }
    }
}
