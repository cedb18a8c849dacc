//! GraphQL client implementation and request orchestration.

pub(crate) mod helpers;
mod http;
mod types;

use log::debug;
use reqwest::header::HeaderMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::CheckError;
use crate::config::Settings;
use crate::navigator;

use self::helpers::{build_headers, operation_label, operation_name};

pub use self::helpers::USER_AGENT_VALUE;
pub use self::http::QueryResponse;
pub use self::types::{Endpoint, GITHUB_GRAPHQL_URL, Query, Token};

/// Client for one test case's calls to the GitHub GraphQL API.
///
/// Each scenario builds its own client; it holds no state beyond the
/// connection pool and the fixed request headers.
pub struct GraphQLClient {
    client: reqwest::Client,
    headers: HeaderMap,
    endpoint: Endpoint,
}

impl GraphQLClient {
    /// Create a client from resolved [`Settings`].
    ///
    /// # Errors
    ///
    /// Returns a [`CheckError`] if the authorization header cannot be
    /// constructed.
    pub fn from_settings(settings: &Settings) -> Result<Self, CheckError> {
        Self::with_endpoint(settings.token.clone(), settings.endpoint.clone())
    }

    /// Create a client targeting a custom endpoint, such as a mock server.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckError`] if the authorization header cannot be
    /// constructed.
    pub fn with_endpoint(
        token: impl Into<Token>,
        endpoint: Endpoint,
    ) -> Result<Self, CheckError> {
        let headers = build_headers(&token.into())?;
        Ok(Self {
            client: reqwest::Client::new(),
            headers,
            endpoint,
        })
    }

    /// Build the JSON request body for `query`.
    ///
    /// `variables` are sent only when they serialize to a non-null value.
    fn payload<V: Serialize>(query: &Query, variables: &V) -> Result<Value, CheckError> {
        let variables = serde_json::to_value(variables).map_err(CheckError::Variables)?;
        let mut payload = json!({ "query": query.as_str() });
        if let Some(obj) = payload.as_object_mut() {
            if !variables.is_null() {
                obj.insert("variables".into(), variables);
            }
            if let Some(name) = operation_name(query.as_str()) {
                obj.insert("operationName".into(), json!(name));
            }
        }
        Ok(payload)
    }

    /// Send one POST and return the raw status and body.
    ///
    /// Non-2xx statuses are returned, not rejected; see
    /// [`QueryResponse::ensure_success`].
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::RequestContext`] if the request cannot be sent or
    /// the body cannot be read.
    pub async fn execute<V>(
        &self,
        query: impl Into<Query>,
        variables: V,
    ) -> Result<QueryResponse, CheckError>
    where
        V: Serialize,
    {
        let query = query.into();
        let operation = operation_label(query.as_str());
        let payload = Self::payload(&query, &variables)?;
        debug!("sending {operation} to {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.as_str())
            .headers(self.headers.clone())
            .json(&payload)
            .send()
            .await
            .map_err(|e| CheckError::RequestContext {
                context: format!("operation {operation} against {}", self.endpoint),
                source: e,
            })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| CheckError::RequestContext {
            context: format!("operation {operation}; reading body with status {status}"),
            source: e,
        })?;
        debug!("{operation} returned status {status} with {} bytes", body.len());
        Ok(QueryResponse {
            operation,
            status,
            body,
        })
    }

    /// Execute a query and decode its `data` member into `T`.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckError`] for transport failures, non-2xx statuses,
    /// GraphQL errors, or a `data` shape that does not match `T`.
    pub async fn run_query<V, T>(&self, query: impl Into<Query>, variables: V) -> Result<T, CheckError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let response = self.execute(query, variables).await?.ensure_success()?;
        navigator::decode_data(&response)
    }
}
