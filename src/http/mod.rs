//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, body decoding)
//!     → handlers.rs (query / search / health)
//!     → query::evaluate or SearchEngine::search
//!     → JSON result, or response.rs failure shape
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use response::{ApiError, Failure};
pub use server::{AppState, HttpServer};
