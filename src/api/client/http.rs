//! Raw HTTP response returned by the query executor.

use super::helpers::{BODY_SNIPPET_LEN, snippet};
use crate::CheckError;

/// Status and body of a single GraphQL call, before any decoding.
#[derive(Debug, Clone)]
pub struct QueryResponse {
    /// Operation name, or a snippet of the document when it is anonymous.
    pub operation: String,
    pub status: u16,
    pub body: String,
}

impl QueryResponse {
    /// Whether the status code is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Pass the response through when its status is 2xx.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::HttpStatus`] naming the status code otherwise.
    pub fn ensure_success(self) -> Result<Self, CheckError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(CheckError::HttpStatus {
                status: self.status,
                operation: self.operation,
                snippet: snippet(&self.body, BODY_SNIPPET_LEN),
            })
        }
    }
}
