//! Configuration resolved from the process environment.
//!
//! The access token is never compiled in. It is read from
//! `GHCHECK_GITHUB_TOKEN`, falling back to `GITHUB_TOKEN`; empty values are
//! ignored. `GITHUB_GRAPHQL_URL` overrides the endpoint.

use log::warn;

use crate::CheckError;
use crate::api::{Endpoint, Token};
use crate::environment;

/// Token variables in order of precedence.
pub const TOKEN_VARS: [&str; 2] = ["GHCHECK_GITHUB_TOKEN", "GITHUB_TOKEN"];
/// Variable overriding the GraphQL endpoint.
pub const ENDPOINT_VAR: &str = "GITHUB_GRAPHQL_URL";

/// Everything a client needs to reach the API.
#[derive(Debug, Clone)]
pub struct Settings {
    pub token: Token,
    pub endpoint: Endpoint,
}

impl Settings {
    /// Resolve settings from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::MissingToken`] when no token variable holds a
    /// value, or [`CheckError::InvalidEndpoint`] when the endpoint override is
    /// not a valid URL.
    pub fn from_env() -> Result<Self, CheckError> {
        let token = resolve_token().ok_or(CheckError::MissingToken {
            vars: "GHCHECK_GITHUB_TOKEN, GITHUB_TOKEN",
        })?;
        Ok(Self {
            token,
            endpoint: endpoint_from_env()?,
        })
    }
}

/// First non-empty token from [`TOKEN_VARS`].
#[must_use]
pub fn resolve_token() -> Option<Token> {
    environment::first_non_empty(&TOKEN_VARS).map(|t| Token::new(t.trim()))
}

/// Endpoint from [`ENDPOINT_VAR`], or the public GitHub endpoint.
///
/// # Errors
///
/// Returns [`CheckError::InvalidEndpoint`] when the override does not parse.
pub fn endpoint_from_env() -> Result<Endpoint, CheckError> {
    match environment::first_non_empty(&[ENDPOINT_VAR]) {
        Some(url) => Endpoint::parse(url.trim()),
        None => {
            if environment::var(ENDPOINT_VAR).is_ok() {
                warn!("{ENDPOINT_VAR} is empty; using the default endpoint");
            }
            Endpoint::github()
        }
    }
}
