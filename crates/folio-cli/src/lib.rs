//! # folio-cli
//!
//! Command-line interface for the Folio portfolio site.
//!
//! - `serve`: run the HTTP server
//! - `list` / `show`: inspect the case study catalog and resolver
//! - `config`: locate, read, edit and export `config.toml`

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod logging;

pub use cli::{Cli, Command, ConfigAction};
pub use config::FolioConfig;
pub use error::{Error, Result};
