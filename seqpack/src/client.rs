//! # Echo Client Module
//!
//! HTTP client for the echo server. It submits the delimited representation
//! and returns the server's summary. There is a single request in flight per
//! call, with no retry; callers log a failure and keep their current state.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Error;
use crate::query;

/// Body of `POST /test`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoRequest<'a> {
    /// The delimited representation, not an array.
    pub company_seqs: &'a str,
}

/// Summary returned by the echo server. `count` and `company_seqs` are
/// absent when the request carried no identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoSummary {
    /// Number of identifiers the server parsed.
    pub count: Option<usize>,
    /// The first identifiers, as strings.
    pub company_seqs: Option<Vec<String>>,
    /// Human readable outcome.
    pub message: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    /// `"OK"` when the server is up.
    pub message: String,
}

/// A client for the echo server.
#[derive(Clone, Debug)]
pub struct EchoClient {
    client: Client,
    base_url: Url,
}

impl EchoClient {
    /// Construct a new [`EchoClient`] rooted at `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Calls `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus, Error> {
        let response = self.client.get(self.endpoint("health")?).send().await?;
        Self::parse(response).await
    }

    /// Submits the delimited representation with `POST /test`.
    #[tracing::instrument(skip_all, fields(length = delimited.len()))]
    pub async fn submit(&self, delimited: &str) -> Result<EchoSummary, Error> {
        let response = self
            .client
            .post(self.endpoint("test")?)
            .json(&EchoRequest {
                company_seqs: delimited,
            })
            .send()
            .await?;
        Self::parse(response).await
    }

    /// Submits the identifiers as repeated query parameters with
    /// `GET /test`, the way the first revision of the client did.
    pub async fn submit_query(&self, ids: &[u64]) -> Result<EchoSummary, Error> {
        let mut url = self.endpoint("test")?;
        let delimited = query::encode(query::DEFAULT_KEY, ids);
        url.set_query((!delimited.is_empty()).then_some(delimited.as_str()));

        let response = self.client.get(url).send().await?;
        Self::parse(response).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    async fn parse<T: for<'de> Deserialize<'de>>(response: reqwest::Response) -> Result<T, Error> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(Error::EchoStatus(status, body));
        }
        Ok(response.json().await?)
    }
}
