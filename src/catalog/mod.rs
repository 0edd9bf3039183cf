//! Vehicle catalog subsystem.
//!
//! # Data Flow
//! ```text
//! cars.json (configured path or bundled sample)
//!     → loader.rs (read & deserialize)
//!     → Catalog (immutable, Arc-backed)
//!     → shared by the query and search engines
//! ```
//!
//! # Design Decisions
//! - Loaded once at startup; no refresh path
//! - Concurrent requests all read the same snapshot without locking

pub mod loader;
pub mod vehicle;

pub use loader::{bundled_catalog, load_catalog, parse_catalog, CatalogError};
pub use vehicle::{Catalog, Vehicle};
