//! Contract checks for the GitHub GraphQL API.
//!
//! The crate sends fixed GraphQL documents for two query shapes, the most
//! starred repositories and the oldest open issues of a repository, decodes
//! the responses into typed models, and asserts their structural and
//! semantic properties. The scenarios in [`scenarios`] are driven by the
//! test harness; see `tests/`.

pub mod api;
pub mod checks;
pub mod config;
pub mod environment;
mod error;
pub mod models;
pub mod navigator;
pub mod queries;
pub mod scenarios;
pub mod test_utils;

pub use api::{Endpoint, GraphQLClient, Query, QueryResponse, Token};
pub use checks::Violation;
pub use config::Settings;
pub use error::CheckError;
