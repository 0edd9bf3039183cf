//! Free-text search over make, model and features.

use regex::{Regex, RegexBuilder};

use crate::catalog::{Catalog, Vehicle};
use crate::search::types::{SearchError, SearchMode, SearchOutcome, SearchResult};

/// Default cap on term length.
pub const DEFAULT_MAX_PATTERN_LEN: usize = 256;

/// Compiled regex size cap, keeps hostile patterns bounded.
const REGEX_SIZE_LIMIT: usize = 1 << 20;

/// A compiled, case-insensitive search term.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    /// Compile a term in the given mode.
    pub fn compile(term: &str, mode: SearchMode) -> Result<Self, SearchError> {
        let pattern = match mode {
            SearchMode::Pattern => term.to_string(),
            SearchMode::Literal => regex::escape(term),
        };
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .size_limit(REGEX_SIZE_LIMIT)
            .build()?;
        Ok(Self { regex })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Make, then model, then any feature.
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        vehicle.make.as_deref().is_some_and(|make| self.is_match(make))
            || vehicle.model.as_deref().is_some_and(|model| self.is_match(model))
            || vehicle.features.iter().any(|feature| self.is_match(feature))
    }
}

/// Search engine with its term-handling policy.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine {
    mode: SearchMode,
    max_pattern_len: usize,
}

impl SearchEngine {
    pub fn new(mode: SearchMode, max_pattern_len: usize) -> Self {
        Self {
            mode,
            max_pattern_len,
        }
    }

    /// Find every vehicle matching `term`, in catalog order.
    ///
    /// An empty term returns an empty result without scanning.
    pub fn search<'a>(&self, catalog: &'a Catalog, term: &str) -> SearchOutcome<'a> {
        if term.is_empty() {
            return Ok(SearchResult::default());
        }

        let len = term.chars().count();
        if len > self.max_pattern_len {
            return Err(SearchError::PatternTooLong {
                len,
                max: self.max_pattern_len,
            });
        }

        let matcher = Matcher::compile(term, self.mode)?;
        let items: Vec<&Vehicle> = catalog
            .vehicles()
            .iter()
            .filter(|vehicle| matcher.matches(vehicle))
            .collect();

        tracing::trace!(term = %term, mode = ?self.mode, matches = items.len(), "Search evaluated");

        Ok(SearchResult {
            total_items: items.len(),
            items,
        })
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchMode::default(), DEFAULT_MAX_PATTERN_LEN)
    }
}

/// Search with the default engine (pattern mode).
pub fn search<'a>(catalog: &'a Catalog, term: &str) -> SearchOutcome<'a> {
    SearchEngine::default().search(catalog, term)
}
