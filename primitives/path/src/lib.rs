// SPDX-License-Identifier: CC0-1.0

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Path utilities and file discovery.
//!
//! This crate provides utilities for finding project roots, locating the
//! external tools directory, and listing freshly generated files.

pub mod discovery;
pub mod path_utils;

// Re-export for convenience
pub use discovery::{FileDiscovery, FsDiscovery};
pub use path_utils::*;
