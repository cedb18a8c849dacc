//! Query executor for the GitHub GraphQL API.
//!
//! [`GraphQLClient`] performs one authenticated POST per call and hands back
//! either the raw [`QueryResponse`] or the decoded `data` member.

pub(crate) mod client;

pub use client::{
    Endpoint, GITHUB_GRAPHQL_URL, GraphQLClient, Query, QueryResponse, Token, USER_AGENT_VALUE,
};
