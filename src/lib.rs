//! In-memory vehicle catalog service.
//!
//! Two read-only operations over an immutable catalog: a filter + sort +
//! paginate query ([`query::evaluate`]) and a free-text search
//! ([`search::SearchEngine`]), served over HTTP by [`HttpServer`].

pub mod catalog;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod query;
pub mod search;

pub use catalog::{Catalog, Vehicle};
pub use config::schema::CatalogConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
