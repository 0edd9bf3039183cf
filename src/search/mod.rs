//! Free-text search subsystem.
//!
//! # Data Flow
//! ```text
//! ?search=<term>
//!     → engine.rs (empty term short-circuits; otherwise compile Matcher)
//!     → scan catalog: make OR model OR any feature
//!     → SearchResult { totalItems, items } (catalog order, unpaginated)
//! ```
//!
//! # Design Decisions
//! - Case-insensitive always
//! - `pattern` mode treats the term as a regular expression, `literal` escapes it
//! - Terms that fail to compile are errors, not empty results

pub mod engine;
pub mod types;

pub use engine::{search, Matcher, SearchEngine, DEFAULT_MAX_PATTERN_LEN};
pub use types::{SearchError, SearchMode, SearchParams, SearchResult};
