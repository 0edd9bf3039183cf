//! Failure responses.
//!
//! Every error leaves the service as `{"success": false, "message": ...}`,
//! the shape clients of the catalog API already handle.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::search::SearchError;

/// Message used when no specific description can be given.
pub const GENERIC_FAILURE: &str = "something went wrong!";

/// Body of every failed request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failure {
    pub success: bool,
    pub message: String,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be decoded.
    #[error("{0}")]
    BadRequest(String),

    /// Search term rejected.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Handler did not finish within the configured request timeout.
    #[error("request timed out")]
    Timeout,

    /// No route for the request.
    #[error("Not found")]
    NotFound,

    /// Anything unexpected.
    #[error("something went wrong!")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Search(_) => StatusCode::BAD_REQUEST,
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut message = self.to_string();
        if message.is_empty() {
            message = GENERIC_FAILURE.to_string();
        }
        (self.status(), Json(Failure::new(message))).into_response()
    }
}
