//! Request and response bodies of the `/test` endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /test`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EchoRequest {
    /// Delimited representation, `companySeq=1&companySeq=2...`. A missing
    /// field is treated like an empty string.
    #[serde(default)]
    pub company_seqs: String,
}

/// Summary of the identifiers found in a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EchoResponse {
    /// Total number of identifiers. Absent when there were none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// The identifiers, possibly truncated. Absent when there were none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_seqs: Option<Vec<String>>,
    /// Human readable outcome.
    pub message: String,
}

impl EchoResponse {
    /// Builds the summary for `values` found under `key`, keeping at most
    /// `limit` values when a limit is given.
    pub fn summarize(key: &str, mut values: Vec<String>, limit: Option<usize>) -> Self {
        if values.is_empty() {
            return Self {
                count: None,
                company_seqs: None,
                message: format!("The {key} parameter is missing."),
            };
        }

        let count = values.len();
        if let Some(limit) = limit {
            values.truncate(limit);
        }

        Self {
            count: Some(count),
            company_seqs: Some(values),
            message: "The request was processed successfully.".to_string(),
        }
    }
}
