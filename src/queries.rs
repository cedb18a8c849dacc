//! GraphQL documents and the fixed parameters the scenarios send with them.

/// Search filter for the most-starred scenarios that inspect ranked results.
pub const STARRED_SEARCH: &str = "stars:>10000 sort:stars-desc";
/// Unsorted filter for the smoke search; GitHub's default ranking applies.
pub const STARRED_FILTER: &str = "stars:>10000";
/// Star count every repository matched by [`STARRED_SEARCH`] must exceed.
pub const STAR_THRESHOLD: u64 = 10_000;
/// Page size requested from the repository search.
pub const SEARCH_PAGE_SIZE: u32 = 20;

/// Repository whose oldest open issues are checked.
pub const ISSUES_OWNER: &str = "nodejs";
pub const ISSUES_REPOSITORY: &str = "node";
/// Page size requested from the issues connection.
pub const ISSUES_PAGE_SIZE: u32 = 10;

pub const MOST_STARRED_QUERY: &str = r"
    query MostStarredRepositories($searchQuery: String!, $first: Int!) {
      search(query: $searchQuery, type: REPOSITORY, first: $first) {
        edges {
          node {
            ... on Repository {
              name
              owner { login }
              stargazers { totalCount }
            }
          }
        }
      }
    }
";

pub const REPOSITORY_COUNT_QUERY: &str = r"
    query StarredRepositoryCount($searchQuery: String!, $first: Int!) {
      search(query: $searchQuery, type: REPOSITORY, first: $first) {
        repositoryCount
      }
    }
";

pub const STAR_COUNTS_QUERY: &str = r"
    query StarredRepositoryStars($searchQuery: String!, $first: Int!) {
      search(query: $searchQuery, type: REPOSITORY, first: $first) {
        edges {
          node {
            ... on Repository {
              stargazers { totalCount }
            }
          }
        }
      }
    }
";

pub const OLDEST_OPEN_ISSUES_QUERY: &str = r"
    query OldestOpenIssues($owner: String!, $name: String!, $first: Int!) {
      repository(owner: $owner, name: $name) {
        issues(first: $first, orderBy: {field: CREATED_AT, direction: ASC}, states: OPEN) {
          edges {
            node {
              title
              createdAt
              url
              state
            }
          }
        }
      }
    }
";
