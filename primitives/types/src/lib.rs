// SPDX-License-Identifier: CC0-1.0

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Core types for the client-binding pipeline.
//!
//! This crate defines the data shared by every stage: the spec being compiled,
//! the target language and platform, the compiler family, the language catalog
//! and the linkage descriptor handed to the build system.

/// Language to compiler-convention table.
pub mod catalog;
/// Target client languages.
pub mod language;
/// Resolved build metadata.
pub mod linkage;
/// Target platforms and compiler families.
pub mod platform;
/// IDL specification descriptor.
pub mod service_spec;

pub use catalog::{CatalogEntry, LanguageCatalog, UnsupportedLanguage, OUTPUT_DIR_PREFIX};
pub use language::ClientLanguage;
pub use linkage::LinkageDescriptor;
pub use platform::{ClientPlatform, CompilerKind};
pub use service_spec::{ServiceSpec, SpecError};
