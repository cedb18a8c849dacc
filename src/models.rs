//! Typed views of the GraphQL responses the scenarios consume.
//!
//! Every field is required. A response missing one fails to decode with the
//! field's path rather than yielding a default.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A connection in the edges/node pagination convention.
#[derive(Debug, Deserialize)]
pub struct Connection<N> {
    pub edges: Vec<Edge<N>>,
}

impl<N> Connection<N> {
    /// Iterate over the nodes in edge order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.edges.iter().map(|edge| &edge.node)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[derive(Debug, Deserialize)]
pub struct Edge<N> {
    pub node: N,
}

/// `data` of a `search` query.
#[derive(Debug, Deserialize)]
pub struct SearchData<S> {
    pub search: S,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryCount {
    #[serde(rename = "repositoryCount")]
    pub repository_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub owner: Owner,
    pub stargazers: Stargazers,
}

/// Repository node when only the star count is requested.
#[derive(Debug, Deserialize)]
pub struct RepositoryStars {
    pub stargazers: Stargazers,
}

#[derive(Debug, Deserialize)]
pub struct Owner {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct Stargazers {
    #[serde(rename = "totalCount")]
    pub total_count: u64,
}

/// `data` of the repository issues query.
#[derive(Debug, Deserialize)]
pub struct IssuesData {
    pub repository: IssueRepository,
}

#[derive(Debug, Deserialize)]
pub struct IssueRepository {
    pub issues: Connection<Issue>,
}

#[derive(Debug, Deserialize)]
pub struct Issue {
    pub title: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub url: String,
    pub state: IssueState,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueState {
    Open,
    Closed,
}

impl IssueState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }
}
