//! Filter-sort-paginate query subsystem.
//!
//! # Data Flow
//! ```text
//! QueryInput (wire JSON, all fields optional)
//!     → types.rs (parse-or-default, lower-cased sets)
//!     → Query (normalized)
//!     → engine.rs (sort by price → filter → slice)
//!     → QueryResult { totalItems, totalPages, currentPage, items }
//! ```
//!
//! # Design Decisions
//! - Filter categories combine with AND, values inside a category with OR
//! - Empty category = no filter
//! - Sort runs before filtering so equal prices keep catalog order
//! - Pure function of catalog + query; never fails

pub mod engine;
pub mod filter;
pub mod types;

pub use engine::evaluate;
pub use filter::CaseInsensitiveSet;
pub use types::{PriceRange, Query, QueryInput, QueryResult, SortOrder};
