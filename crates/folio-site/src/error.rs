//! Error types for folio-site

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::templates::NotFoundTemplate;

/// Result type alias for folio-site operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folio-site
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from folio-core
    #[error("Core error: {0}")]
    Core(#[from] folio_core::Error),

    /// The listener could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested
        addr: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The server loop exited with an error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl Error {
    /// Returns `true` when the request named something that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Core(e) if e.is_not_found())
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        if self.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn category(&self) -> &'static str {
        if self.is_not_found() {
            "not_found"
        } else {
            "internal"
        }
    }
}

/// HTML error pages: a 404 page for NotFound, a bare 500 otherwise.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if self.is_not_found() {
            return not_found_page();
        }
        tracing::error!("Request failed: {self}");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

/// The standard 404 page.
pub fn not_found_page() -> Response {
    (StatusCode::NOT_FOUND, NotFoundTemplate::new()).into_response()
}

/// JSON rendering of [`Error`] for the `/api` routes.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl From<folio_core::Error> for ApiError {
    fn from(err: folio_core::Error) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        if !self.0.is_not_found() {
            tracing::error!("API request failed: {}", self.0);
        }
        let body = serde_json::json!({
            "error": {
                "category": self.0.category(),
                "message": self.0.to_string(),
            }
        });
        (status, Json(body)).into_response()
    }
}
