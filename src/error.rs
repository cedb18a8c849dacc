//! Error type shared by the executor, navigator and scenarios.
//!
//! Every way a scenario can fail maps to one variant so the test harness can
//! report it verbatim.

use thiserror::Error;

use crate::checks::Violation;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("no GitHub token configured; set one of {vars}")]
    MissingToken { vars: &'static str },
    #[error("invalid GraphQL endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("cannot serialise query variables: {0}")]
    Variables(#[source] serde_json::Error),
    #[error("request failed when running {context}: {source}")]
    RequestContext {
        context: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP status {status} from {operation} | body snippet: {snippet}")]
    HttpStatus {
        status: u16,
        operation: String,
        snippet: String,
    },
    #[error("malformed response (status {status}): {message} | snippet: {snippet}")]
    BadResponseSerde {
        status: u16,
        message: String,
        snippet: String,
    },
    #[error("empty GraphQL response (status {status}) for operation {operation} | snippet: {snippet}")]
    EmptyResponse {
        status: u16,
        operation: String,
        snippet: String,
    },
    #[error("field `{field}` not found in response from {operation}")]
    MissingField { operation: String, field: String },
    #[error("API errors: {0}")]
    ApiErrors(String),
    #[error("assertion failed: {0}")]
    Assertion(#[from] Violation),
}
