// SPDX-License-Identifier: CC0-1.0

//! Build metadata produced for one client generation.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What a build system needs to compile and link a generated client.
///
/// Directory sets never hold duplicates. Library names and sources keep the
/// order they were added in and ignore repeated entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkageDescriptor {
    /// Directories to add to the include/import path
    pub include_directories: BTreeSet<PathBuf>,
    /// Directories to search for runtime libraries
    pub library_paths: BTreeSet<PathBuf>,
    /// Runtime libraries to link against, e.g. `Thrift.dll`
    pub libraries: Vec<String>,
    /// Generated source files
    pub sources: Vec<PathBuf>,
}

impl LinkageDescriptor {
    /// Create an empty descriptor.
    pub fn new() -> Self { Self::default() }

    /// Add an include directory.
    pub fn add_include_directory(&mut self, dir: impl Into<PathBuf>) {
        self.include_directories.insert(dir.into());
    }

    /// Add a library search path.
    pub fn add_library_path(&mut self, dir: impl Into<PathBuf>) {
        self.library_paths.insert(dir.into());
    }

    /// Append a library name unless it is already present.
    pub fn add_library(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.libraries.contains(&name) {
            self.libraries.push(name);
        }
    }

    /// Append source files, skipping ones already listed.
    pub fn extend_sources<I>(&mut self, sources: I)
    where
        I: IntoIterator<Item = PathBuf>,
    {
        for source in sources {
            if !self.sources.contains(&source) {
                self.sources.push(source);
            }
        }
    }

    /// True when nothing has been resolved.
    pub fn is_empty(&self) -> bool {
        self.include_directories.is_empty()
            && self.library_paths.is_empty()
            && self.libraries.is_empty()
            && self.sources.is_empty()
    }
}
