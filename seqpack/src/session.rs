//! Client session state.
//!
//! A [`Session`] is never mutated. Every user action produces a new session
//! through [`Session::apply`], and the address bar is a projection of the
//! session written with [`url_state::write`] and read back with
//! [`url_state::restore`]. A failed action returns an error and leaves the
//! previous session untouched.

use tracing::{debug, info};
use url::Url;

use crate::error::Error;
use crate::query;
use crate::selector::{CodecSelector, CompressionStats};
use crate::url_state::{self, Location};

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the identifiers and write them, compressed, into the URL.
    Generate(Vec<u64>),
    /// Navigate to a URL, adding a history entry, and restore the
    /// identifiers it carries.
    Load(Url),
    /// Drop the identifiers and clear the URL query.
    Clear,
}

/// Immutable client state.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    location: Location,
    ids: Vec<u64>,
    stats: Option<CompressionStats>,
}

impl Session {
    /// A blank session at `url`. The URL is not inspected.
    pub fn new(url: Url) -> Self {
        Self {
            location: Location::new(url),
            ids: Vec::new(),
            stats: None,
        }
    }

    /// A session restored from `url`, as on initial page load.
    pub fn load(url: Url) -> Result<Self, Error> {
        Self::restored(Location::new(url))
    }

    /// The identifiers currently held.
    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    /// Statistics from the last generation, if the identifiers were
    /// generated in this session rather than restored.
    pub fn stats(&self) -> Option<&CompressionStats> {
        self.stats.as_ref()
    }

    /// The address bar.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// The current URL.
    pub fn url(&self) -> &Url {
        self.location.current()
    }

    /// The delimited representation of the identifiers.
    pub fn delimited(&self) -> String {
        query::encode(query::DEFAULT_KEY, &self.ids)
    }

    /// Computes the session that follows `action`.
    pub fn apply(&self, selector: &CodecSelector, action: Action) -> Result<Session, Error> {
        match action {
            Action::Generate(ids) if ids.is_empty() => {
                debug!("no identifiers, clearing URL state");
                Ok(self.cleared())
            }
            Action::Generate(ids) => {
                if let Some(zero) = ids.iter().find(|id| **id == 0) {
                    return Err(Error::InvalidIdentifier(zero.to_string()));
                }

                let delimited = query::encode(query::DEFAULT_KEY, &ids);
                let selection = selector.select(&delimited)?;
                let url = url_state::write(self.url(), &selection.payload);

                info!(
                    count = ids.len(),
                    original_length = selection.stats.original_length,
                    payload_length = selection.payload.payload.len(),
                    codec = %selection.payload.codec,
                    "identifiers written to URL"
                );

                Ok(Session {
                    location: self.location.replace(url),
                    ids,
                    stats: Some(selection.stats),
                })
            }
            Action::Load(url) => Self::restored(self.location.push(url)),
            Action::Clear => Ok(self.cleared()),
        }
    }

    fn restored(location: Location) -> Result<Session, Error> {
        let ids = match url_state::restore(location.current())? {
            Some(delimited) => query::decode_ids(&delimited, query::DEFAULT_KEY)?,
            None => Vec::new(),
        };
        info!(count = ids.len(), "identifiers restored from URL");

        Ok(Session {
            location,
            ids,
            stats: None,
        })
    }

    fn cleared(&self) -> Session {
        Session {
            location: self.location.replace(url_state::clear(self.url())),
            ids: Vec::new(),
            stats: None,
        }
    }
}
