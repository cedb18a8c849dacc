//! Decoding of GraphQL response bodies.
//!
//! Bodies are decoded once into typed models. Any field the model requires
//! but the body lacks is reported with its JSON path instead of defaulting.

use log::warn;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::CheckError;
use crate::api::QueryResponse;
use crate::api::client::helpers::{BODY_SNIPPET_LEN, VALUE_SNIPPET_LEN, snippet};

#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLError {
    message: String,
}

/// Join GraphQL error messages into a single [`CheckError::ApiErrors`].
fn handle_graphql_errors(errors: Vec<GraphQLError>) -> CheckError {
    let msg = errors
        .into_iter()
        .map(|e| e.message)
        .collect::<Vec<_>>()
        .join(", ");
    CheckError::ApiErrors(msg)
}

/// Parse the response body as JSON.
///
/// # Errors
///
/// Returns [`CheckError::BadResponseSerde`] when the body is not JSON.
pub fn parse_json(resp: &QueryResponse) -> Result<Value, CheckError> {
    serde_json::from_str(&resp.body).map_err(|e| CheckError::BadResponseSerde {
        status: resp.status,
        message: e.to_string(),
        snippet: snippet(&resp.body, BODY_SNIPPET_LEN),
    })
}

/// Whether `key` appears as an object key anywhere in `value`.
#[must_use]
pub fn contains_field(value: &Value, key: &str) -> bool {
    match value {
        Value::Object(map) => {
            map.contains_key(key) || map.values().any(|v| contains_field(v, key))
        }
        Value::Array(items) => items.iter().any(|v| contains_field(v, key)),
        _ => false,
    }
}

/// Require `key` somewhere in the response body.
///
/// # Errors
///
/// Returns [`CheckError::BadResponseSerde`] when the body is not JSON and
/// [`CheckError::MissingField`] when no object in it has `key`.
pub fn require_field(resp: &QueryResponse, key: &str) -> Result<(), CheckError> {
    let value = parse_json(resp)?;
    if contains_field(&value, key) {
        Ok(())
    } else {
        Err(CheckError::MissingField {
            operation: resp.operation.clone(),
            field: key.to_string(),
        })
    }
}

/// Decode the `data` member of a GraphQL envelope into `T`.
///
/// # Errors
///
/// Returns [`CheckError::ApiErrors`] when the envelope carries errors,
/// [`CheckError::EmptyResponse`] when `data` is absent or null, and
/// [`CheckError::BadResponseSerde`] when `data` does not match `T`; the
/// message names the offending path.
pub fn decode_data<T>(resp: &QueryResponse) -> Result<T, CheckError>
where
    T: DeserializeOwned,
{
    let envelope: GraphQLResponse<Value> =
        serde_json::from_str(&resp.body).map_err(|e| CheckError::BadResponseSerde {
            status: resp.status,
            message: e.to_string(),
            snippet: snippet(&resp.body, BODY_SNIPPET_LEN),
        })?;
    if let Some(errs) = envelope.errors.filter(|errs| !errs.is_empty()) {
        warn!("{} returned {} GraphQL error(s)", resp.operation, errs.len());
        return Err(handle_graphql_errors(errs));
    }
    let Some(value) = envelope.data.filter(|v| !v.is_null()) else {
        return Err(CheckError::EmptyResponse {
            status: resp.status,
            operation: resp.operation.clone(),
            snippet: snippet(&resp.body, BODY_SNIPPET_LEN),
        });
    };
    serde_path_to_error::deserialize::<_, T>(&value).map_err(|e| {
        let snippet = match serde_json::to_string_pretty(&value) {
            Ok(json) => snippet(&json, VALUE_SNIPPET_LEN),
            Err(e) => {
                warn!("failed to serialise error snippet: {e}");
                "<failed to serialise error snippet>".to_string()
            }
        };
        let path = e.path().to_string();
        let inner = e.into_inner();
        CheckError::BadResponseSerde {
            status: resp.status,
            message: format!("{inner} at {path}"),
            snippet,
        }
    })
}
