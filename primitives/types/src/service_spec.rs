// SPDX-License-Identifier: CC0-1.0

//! The IDL specification unit handed to the pipeline.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while constructing a [`ServiceSpec`].
#[derive(Debug, Error)]
pub enum SpecError {
    /// The source directory does not exist or is not a directory
    #[error("Spec source directory not found: {0}")]
    NotADirectory(PathBuf),
    /// The main spec file is missing under the source directory
    #[error("Main spec file not found: {0}")]
    MissingMainSpec(PathBuf),
}

/// An IDL specification: a source directory and the main file inside it.
///
/// Files included by the main spec are resolved by the external tools relative
/// to the source directory and are not tracked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSpec {
    directory: PathBuf,
    main_spec_file: PathBuf,
}

impl ServiceSpec {
    /// Create a spec, checking that `main_spec_file` exists under `directory`.
    pub fn new(
        directory: impl Into<PathBuf>,
        main_spec_file: impl Into<PathBuf>,
    ) -> Result<Self, SpecError> {
        let spec = Self::from_parts(directory, main_spec_file);
        if !spec.directory.is_dir() {
            return Err(SpecError::NotADirectory(spec.directory));
        }
        let main = spec.main_spec_path();
        if !main.is_file() {
            return Err(SpecError::MissingMainSpec(main));
        }
        Ok(spec)
    }

    /// Create a spec without touching the filesystem.
    pub fn from_parts(directory: impl Into<PathBuf>, main_spec_file: impl Into<PathBuf>) -> Self {
        Self { directory: directory.into(), main_spec_file: main_spec_file.into() }
    }

    /// Directory holding the spec files.
    pub fn directory(&self) -> &Path { &self.directory }

    /// Main spec file, relative to [`Self::directory`].
    pub fn main_spec_file(&self) -> &Path { &self.main_spec_file }

    /// Full path of the main spec file.
    pub fn main_spec_path(&self) -> PathBuf { self.directory.join(&self.main_spec_file) }

    /// File stem of the main spec, e.g. `Foo` for `Foo.thrift`.
    pub fn spec_name(&self) -> String {
        self.main_spec_file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
