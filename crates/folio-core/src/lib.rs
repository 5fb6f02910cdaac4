//! Folio Core: case study catalog, route resolution, and shared types.
//!
//! This crate holds everything about the portfolio that is independent of
//! HTTP. It has no internal Folio dependencies.
//!
//! # Modules
//!
//! - [`catalog`]: The compiled-in case study table
//! - [`resolver`]: Route segments → listing or detail decision
//! - [`profile`]: Home page biographical data
//! - [`traits`]: Configuration management trait
//! - [`error`]: Error types and Result alias
//! - [`util`]: TOML dotted-key helpers

#![doc = include_str!("../README.md")]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod profile;
mod proptests;
pub mod resolver;
pub mod traits;
pub mod util;

// Re-export key types at crate root for convenience
pub use catalog::{CaseStudy, CaseStudyId, Catalog, PreviewKind};
pub use error::{Error, Result};
pub use profile::Profile;
pub use resolver::{RenderDecision, resolve, resolve_path};
pub use traits::ConfigManager;
