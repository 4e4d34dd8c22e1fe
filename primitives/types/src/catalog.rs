// SPDX-License-Identifier: CC0-1.0

//! Mapping from client languages to spec compiler naming conventions.
//!
//! The catalog is a single immutable table shared by the whole process. It is
//! the only place that knows which flag the compiler expects for a language,
//! where the compiler writes that language's sources, and which file extension
//! those sources carry.

use thiserror::Error;

use crate::language::ClientLanguage;

/// Prefix the spec compiler puts in front of the language flag when naming
/// its per-language output directory.
pub const OUTPUT_DIR_PREFIX: &str = "gen-";

/// Returned when a language has no catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unsupported client language: {0}")]
pub struct UnsupportedLanguage(pub ClientLanguage);

/// Compiler naming conventions for one client language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Language this entry describes
    pub language: ClientLanguage,
    /// Flag passed to the compiler as `--<flag>`
    pub compiler_flag: &'static str,
    /// Directory the compiler creates under the output directory
    pub output_subdir: &'static str,
    /// Extension of generated source files, without the dot
    pub source_extension: &'static str,
}

impl CatalogEntry {
    const fn new(
        language: ClientLanguage,
        compiler_flag: &'static str,
        output_subdir: &'static str,
        source_extension: &'static str,
    ) -> Self {
        Self { language, compiler_flag, output_subdir, source_extension }
    }

    /// Glob pattern matching generated sources, e.g. `*.cs`.
    pub fn source_pattern(&self) -> String { format!("*.{}", self.source_extension) }
}

static CATALOG: [CatalogEntry; 5] = [
    CatalogEntry::new(ClientLanguage::CPlusPlus, "cpp", "gen-cpp", "cpp"),
    CatalogEntry::new(ClientLanguage::CSharp, "csharp", "gen-csharp", "cs"),
    CatalogEntry::new(ClientLanguage::Java, "java", "gen-java", "java"),
    CatalogEntry::new(ClientLanguage::Javascript, "js", "gen-js", "js"),
    CatalogEntry::new(ClientLanguage::Python, "py", "gen-py", "py"),
];

/// Read-only lookup over the language table.
pub struct LanguageCatalog;

impl LanguageCatalog {
    /// Look up the compiler conventions for `language`.
    pub fn resolve(language: ClientLanguage) -> Result<&'static CatalogEntry, UnsupportedLanguage> {
        CATALOG.iter().find(|entry| entry.language == language).ok_or(UnsupportedLanguage(language))
    }

    /// All registered entries.
    pub fn entries() -> &'static [CatalogEntry] { &CATALOG }

    /// Whether `language` has a registered entry.
    pub fn is_supported(language: ClientLanguage) -> bool { Self::resolve(language).is_ok() }
}
