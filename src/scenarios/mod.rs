//! Contract scenarios run against the GitHub GraphQL API.
//!
//! Each scenario issues exactly one request through the given client and
//! evaluates its checks once, returning the first failed check as a
//! [`CheckError`](crate::CheckError). Scenarios share no state, so the
//! harness may run them in parallel.

pub mod most_starred;
pub mod oldest_issues;
