//! Case-insensitive membership filters.
//!
//! # Design Decisions
//! - Filter values are lower-cased once per query, not once per record
//! - Empty set = no filter (admits everything)
//! - Missing record field never matches a non-empty set

use std::collections::HashSet;

/// A set of strings compared without regard to case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseInsensitiveSet {
    values: HashSet<String>,
}

impl CaseInsensitiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value: &str) {
        self.values.insert(value.to_lowercase());
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Filter semantics: an empty set admits anything, otherwise the value
    /// must be present and a member.
    pub fn admits(&self, value: Option<&str>) -> bool {
        if self.is_empty() {
            return true;
        }
        value.is_some_and(|v| self.contains(v))
    }
}

impl<S: AsRef<str>> FromIterator<S> for CaseInsensitiveSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value.as_ref());
        }
        set
    }
}
