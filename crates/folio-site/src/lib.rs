//! # folio-site
//!
//! HTTP server for the Folio portfolio site.
//!
//! This crate provides:
//! - The home page and case study pages, rendered with askama
//! - A JSON view of the case study resolver under `/api`
//! - Static preview assets under `/projects`
//! - Server lifecycle with graceful shutdown

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod handlers;
pub mod markdown;
pub mod router;
pub mod server;
pub mod state;
pub mod templates;

pub use error::{ApiError, Error, Result};
pub use router::create_router;
pub use server::{BoundServer, Server, ServerConfig};
pub use state::AppState;
