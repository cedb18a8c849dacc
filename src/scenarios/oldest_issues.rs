//! Scenarios for the ten oldest open issues of `nodejs/node`.

use log::debug;
use serde_json::{Value, json};

use crate::checks::{ensure_count, ensure_equal, ensure_non_decreasing, ensure_non_empty};
use crate::models::{IssueState, IssuesData};
use crate::queries::{ISSUES_OWNER, ISSUES_PAGE_SIZE, ISSUES_REPOSITORY, OLDEST_OPEN_ISSUES_QUERY};
use crate::{CheckError, GraphQLClient, navigator};

fn issue_variables() -> Value {
    json!({
        "owner": ISSUES_OWNER,
        "name": ISSUES_REPOSITORY,
        "first": ISSUES_PAGE_SIZE,
    })
}

async fn fetch_issues(client: &GraphQLClient) -> Result<IssuesData, CheckError> {
    let data: IssuesData = client
        .run_query(OLDEST_OPEN_ISSUES_QUERY, issue_variables())
        .await?;
    debug!(
        "{ISSUES_OWNER}/{ISSUES_REPOSITORY} returned {} issues",
        data.repository.issues.len()
    );
    Ok(data)
}

/// The issues query succeeds and its body mentions `issues`.
///
/// # Errors
///
/// Returns a [`CheckError`] for transport failures, non-2xx statuses, or a
/// body without an `issues` field.
pub async fn query_returns_issues(client: &GraphQLClient) -> Result<(), CheckError> {
    let response = client
        .execute(OLDEST_OPEN_ISSUES_QUERY, issue_variables())
        .await?
        .ensure_success()?;
    navigator::require_field(&response, "issues")
}

/// A full page of issues, each with a title and a URL.
///
/// # Errors
///
/// Returns a [`CheckError`] when the request fails, the page is short, or an
/// issue has a blank title or URL.
pub async fn issues_have_title_and_url(client: &GraphQLClient) -> Result<(), CheckError> {
    let issues = fetch_issues(client).await?.repository.issues;
    ensure_count(
        "repository.issues.edges",
        issues.len(),
        ISSUES_PAGE_SIZE as usize,
    )?;
    for (index, issue) in issues.nodes().enumerate() {
        ensure_non_empty("node.title", index, &issue.title)?;
        ensure_non_empty("node.url", index, &issue.url)?;
    }
    Ok(())
}

/// `createdAt` never decreases from one issue to the next.
///
/// # Errors
///
/// Returns a [`CheckError`] when the request fails or two neighbouring issues
/// are out of order.
pub async fn issues_sorted_oldest_first(client: &GraphQLClient) -> Result<(), CheckError> {
    let issues = fetch_issues(client).await?.repository.issues;
    let created: Vec<_> = issues.nodes().map(|issue| issue.created_at).collect();
    ensure_non_decreasing("node.createdAt", &created)?;
    Ok(())
}

/// Every returned issue has a title and is in the `OPEN` state.
///
/// # Errors
///
/// Returns a [`CheckError`] when the request fails or an issue has a blank
/// title or a state other than `OPEN`.
pub async fn issues_are_open(client: &GraphQLClient) -> Result<(), CheckError> {
    let issues = fetch_issues(client).await?.repository.issues;
    for (index, issue) in issues.nodes().enumerate() {
        ensure_non_empty("node.title", index, &issue.title)?;
        ensure_equal(
            "node.state",
            index,
            issue.state.as_str(),
            IssueState::Open.as_str(),
        )?;
    }
    Ok(())
}
