//! Search types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Vehicle;

/// How the search term is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// The term is a case-insensitive regular expression.
    #[default]
    Pattern,
    /// The term is escaped and matched as a plain substring.
    Literal,
}

/// Query string of the search operation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchParams {
    pub search: String,
}

/// All matching vehicles, in catalog order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    pub total_items: usize,
    pub items: Vec<&'a Vehicle>,
}

/// Errors that can occur while compiling a search term.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The term is not a valid pattern.
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The term exceeds the configured maximum length.
    #[error("Search term is {len} characters, maximum is {max}")]
    PatternTooLong { len: usize, max: usize },
}

/// Result type for search operations.
pub type SearchOutcome<'a> = Result<SearchResult<'a>, SearchError>;
