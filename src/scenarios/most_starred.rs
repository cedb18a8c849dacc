//! Scenarios for the repository search `stars:>10000`, first 20.

use log::debug;
use serde_json::{Value, json};

use crate::checks::{ensure_above, ensure_at_least, ensure_count, ensure_non_empty};
use crate::models::{Connection, RepositoryCount, RepositoryStars, RepositorySummary, SearchData};
use crate::queries::{
    MOST_STARRED_QUERY, REPOSITORY_COUNT_QUERY, SEARCH_PAGE_SIZE, STAR_COUNTS_QUERY,
    STAR_THRESHOLD, STARRED_FILTER, STARRED_SEARCH,
};
use crate::{CheckError, GraphQLClient, navigator};

fn search_variables() -> Value {
    json!({ "searchQuery": STARRED_SEARCH, "first": SEARCH_PAGE_SIZE })
}

/// The unsorted search succeeds and its body mentions `stargazers`.
///
/// # Errors
///
/// Returns a [`CheckError`] for transport failures, non-2xx statuses, or a
/// body without a `stargazers` field.
pub async fn search_returns_stargazers(client: &GraphQLClient) -> Result<(), CheckError> {
    let response = client
        .execute(
            MOST_STARRED_QUERY,
            json!({ "searchQuery": STARRED_FILTER, "first": SEARCH_PAGE_SIZE }),
        )
        .await?
        .ensure_success()?;
    navigator::require_field(&response, "stargazers")
}

/// `repositoryCount` is at least the requested page size.
///
/// # Errors
///
/// Returns a [`CheckError`] when the request fails or the count is short.
pub async fn repository_count_meets_page_size(client: &GraphQLClient) -> Result<(), CheckError> {
    let data: SearchData<RepositoryCount> = client
        .run_query(REPOSITORY_COUNT_QUERY, search_variables())
        .await?;
    debug!("repositoryCount = {}", data.search.repository_count);
    ensure_at_least(
        "search.repositoryCount",
        data.search.repository_count,
        u64::from(SEARCH_PAGE_SIZE),
    )?;
    Ok(())
}

/// A full page of repositories, each with a name, an owner and some stars.
///
/// # Errors
///
/// Returns a [`CheckError`] when the request fails, the page is short, or a
/// repository lacks a name, owner login or stars.
pub async fn repositories_have_required_fields(client: &GraphQLClient) -> Result<(), CheckError> {
    let data: SearchData<Connection<RepositorySummary>> = client
        .run_query(MOST_STARRED_QUERY, search_variables())
        .await?;
    let edges = &data.search;
    ensure_count("search.edges", edges.len(), SEARCH_PAGE_SIZE as usize)?;
    for (index, repo) in edges.nodes().enumerate() {
        ensure_non_empty("node.name", index, &repo.name)?;
        ensure_non_empty("node.owner.login", index, &repo.owner.login)?;
        ensure_above(
            "node.stargazers.totalCount",
            index,
            repo.stargazers.total_count,
            0,
        )?;
    }
    Ok(())
}

/// Every returned repository has more stars than the search filter's bound.
///
/// # Errors
///
/// Returns a [`CheckError`] when the request fails or a repository has
/// `STAR_THRESHOLD` stars or fewer.
pub async fn repositories_exceed_star_threshold(client: &GraphQLClient) -> Result<(), CheckError> {
    let data: SearchData<Connection<RepositoryStars>> = client
        .run_query(STAR_COUNTS_QUERY, search_variables())
        .await?;
    for (index, repo) in data.search.nodes().enumerate() {
        ensure_above(
            "node.stargazers.totalCount",
            index,
            repo.stargazers.total_count,
            STAR_THRESHOLD,
        )?;
    }
    Ok(())
}
