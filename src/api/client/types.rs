//! Newtypes for the pieces of a GraphQL request.

use std::fmt;

use url::Url;

use crate::CheckError;

/// The public GitHub GraphQL endpoint.
pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// A GraphQL document sent as the `query` member of the request body.
#[derive(Debug, Clone)]
pub struct Query(String);

impl Query {
    pub fn new(query: impl Into<String>) -> Self {
        Self(query.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A GitHub access token.
///
/// `Debug` never prints the secret.
#[derive(Clone)]
pub struct Token(String);

impl Token {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A validated GraphQL endpoint URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(Url);

impl Endpoint {
    /// Parse and validate an endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::InvalidEndpoint`] when `url` is not an absolute URL.
    pub fn parse(url: &str) -> Result<Self, CheckError> {
        Url::parse(url)
            .map(Self)
            .map_err(|source| CheckError::InvalidEndpoint {
                endpoint: url.to_string(),
                source,
            })
    }

    /// The public GitHub endpoint, [`GITHUB_GRAPHQL_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::InvalidEndpoint`] if the constant fails to parse.
    pub fn github() -> Result<Self, CheckError> {
        Self::parse(GITHUB_GRAPHQL_URL)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
