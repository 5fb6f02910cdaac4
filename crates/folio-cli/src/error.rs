//! Error types for folio-cli

use thiserror::Error;

/// Result type alias for folio-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folio-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from folio-core
    #[error(transparent)]
    Core(#[from] folio_core::Error),

    /// Error from folio-site
    #[error(transparent)]
    Site(#[from] folio_site::Error),

    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Text output could not be formatted
    #[error("Format error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Core(e) => e.is_not_found(),
            Error::Site(e) => e.is_not_found(),
            Error::Json(_) | Error::Fmt(_) => false,
        }
    }
}
