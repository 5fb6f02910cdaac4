//! Utility modules.
//!
//! - [`keys`]: Dotted-key access over TOML value trees

pub mod keys;
