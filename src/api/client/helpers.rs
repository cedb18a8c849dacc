//! Helper utilities for GraphQL request handling.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};

use super::types::Token;
use crate::CheckError;

/// Identifying `User-Agent` sent with every request.
pub const USER_AGENT_VALUE: &str = "ghcheck";

/// Maximum number of characters kept from a response body in error messages.
pub(crate) const BODY_SNIPPET_LEN: usize = 500;
/// Maximum number of characters kept from a decoded value in error messages.
pub(crate) const VALUE_SNIPPET_LEN: usize = 200;
/// Length of the document prefix used to label anonymous operations.
const OPERATION_SNIPPET_LEN: usize = 64;

/// Trim `text` to `max` characters, appending `...` when truncated.
///
/// Returns an empty string when `max` is zero.
pub(crate) fn snippet(text: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut out = text.chars().take(max).collect::<String>();
        out.push_str("...");
        out
    }
}

/// Extract the operation name from a GraphQL document.
///
/// Returns `None` for anonymous operations and shorthand `{ ... }` queries.
pub(super) fn operation_name(query: &str) -> Option<&str> {
    let trimmed = query.trim_start();
    for prefix in ["query", "mutation", "subscription"] {
        if let Some(rest) = trimmed.strip_prefix(prefix) {
            // "queryX" is not a query keyword.
            let first = rest.chars().next();
            let is_delim =
                matches!(first, Some(ch) if matches!(ch, '{' | '(' | ' ' | '\n' | '\t' | '\r'));
            if !is_delim {
                continue;
            }
            let name = rest
                .trim_start()
                .split(|c: char| c.is_whitespace() || c == '(' || c == '{')
                .next()
                .filter(|s| !s.is_empty());
            if let Some(name) = name {
                return Some(name);
            }
        }
    }
    None
}

/// Label used for an operation in logs and errors.
pub(super) fn operation_label(query: &str) -> String {
    operation_name(query).map_or_else(
        || snippet(query.trim(), OPERATION_SNIPPET_LEN),
        str::to_string,
    )
}

/// Build the fixed request headers, adding `Authorization` when a token is set.
pub(super) fn build_headers(token: &Token) -> Result<HeaderMap, CheckError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );
    if !token.is_empty() {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.as_str()))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}
