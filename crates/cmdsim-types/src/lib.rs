//! Foundation types shared by all cmdsim crates.
//!
//! Holds the error taxonomy every namespace and interpreter operation reports
//! through, the session configuration loaded from TOML, and small text
//! formatting helpers used by the listing and system commands.

pub mod config;
pub mod error;
pub mod text;
