// SPDX-License-Identifier: CC0-1.0

//! Path utility functions for finding project roots and resolving paths.
//!
//! This module provides utilities for finding the project root, locating the
//! conventional external-tools directory, and resolving user-supplied paths.

use std::path::{Path, PathBuf};

/// Directory, relative to the project root, that holds external tools such as
/// spec compilers and their runtime libraries.
pub const EXTERNAL_TOOLS_DIR: &str = "external";

/// Find the workspace root by looking for the root Cargo.toml
///
/// This function walks up the directory tree from the current directory
/// until it finds a `Cargo.toml` file containing `[workspace]`.
///
/// # Returns
///
/// Returns `Result<PathBuf>` containing the path to the workspace root directory.
/// Returns an error if the workspace root cannot be found.
pub fn find_project_root() -> Result<PathBuf, Box<dyn std::error::Error>> {
    find_project_root_from(&std::env::current_dir()?)
}

/// Same as [`find_project_root`], starting the search at `start`.
pub fn find_project_root_from(start: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut current = start.to_path_buf();
    loop {
        let cargo_toml = current.join("Cargo.toml");
        if cargo_toml.exists() {
            let contents = std::fs::read_to_string(&cargo_toml)?;
            if contents.contains("[workspace]") {
                return Ok(current);
            }
        }
        if !current.pop() {
            return Err("Could not find workspace root (no workspace Cargo.toml found)".into());
        }
    }
}

/// Default tools root: `<project root>/external`, or `./external` when no
/// project root can be found.
pub fn default_tools_root() -> PathBuf {
    find_project_root()
        .map(|root| root.join(EXTERNAL_TOOLS_DIR))
        .unwrap_or_else(|_| PathBuf::from(EXTERNAL_TOOLS_DIR))
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Make `path` absolute relative to the current directory.
///
/// Output directories end up in linkage metadata consumed by other tools, so
/// relative paths are anchored before they are recorded.
pub fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    Ok(resolve_against(&std::env::current_dir()?, path))
}
