//! Turning spec compiler output into linkage metadata.
//!
//! The compiler writes each language's sources to `<output>/gen-<flag>/` and
//! ships the matching runtime library in `lib/<flag>/` next to its binary.
//! How those pieces become include paths, library paths and library names
//! depends on how the language links, captured by [`LinkageConvention`].

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use path::FileDiscovery;
use types::{
    CatalogEntry, ClientLanguage, ClientPlatform, LanguageCatalog, LinkageDescriptor, ServiceSpec,
};

/// Runtime assembly managed clients reference.
pub const MANAGED_RUNTIME_LIBRARY: &str = "Thrift.dll";

/// Directory next to the compiler binary holding per-language runtimes.
pub const RUNTIME_LIB_DIR: &str = "lib";

/// Default recency window for generated client sources.
pub const DEFAULT_SOURCE_WINDOW: Duration = Duration::from_secs(60);

/// One client generation: what was compiled, where to, for which target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Spec that was compiled
    pub spec: ServiceSpec,
    /// Output directory handed to the compiler
    pub output_dir: PathBuf,
    /// Client language generated
    pub language: ClientLanguage,
    /// Target platform
    pub platform: ClientPlatform,
}

/// How generated code for a language is consumed by a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkageConvention {
    /// Compiled against a managed runtime assembly that is referenced by name.
    Managed,
    /// Native sources linked against the runtime library directory.
    Native,
    /// JVM sources with the runtime on the class path.
    Jvm,
    /// Nothing to compile or link (scripting languages, or no catalog entry).
    Unlinked,
}

impl LinkageConvention {
    /// Convention used by `language`.
    pub fn for_language(language: ClientLanguage) -> Self {
        match language {
            ClientLanguage::CSharp => LinkageConvention::Managed,
            ClientLanguage::CPlusPlus => LinkageConvention::Native,
            ClientLanguage::Java => LinkageConvention::Jvm,
            ClientLanguage::Javascript | ClientLanguage::Python | ClientLanguage::Go => {
                LinkageConvention::Unlinked
            }
        }
    }

    /// Whether this convention expects generated sources to be collected.
    pub fn collects_sources(&self) -> bool { !matches!(self, LinkageConvention::Unlinked) }
}

/// Produces a [`LinkageDescriptor`] after a successful compile.
pub trait LinkageResolution: Send + Sync {
    /// Resolve linkage for `request`, given the `compiler` binary that ran.
    fn resolve(&self, request: &GenerationRequest, compiler: &Path) -> LinkageDescriptor;
}

/// Default [`LinkageResolution`] following the compiler's directory layout.
pub struct LinkageResolver {
    discovery: Arc<dyn FileDiscovery>,
    source_window: Duration,
}

impl LinkageResolver {
    /// Create a resolver that finds sources through `discovery`.
    pub fn new(discovery: Arc<dyn FileDiscovery>) -> Self {
        Self { discovery, source_window: DEFAULT_SOURCE_WINDOW }
    }

    /// Override the recency window used to collect generated sources.
    pub fn with_source_window(mut self, window: Duration) -> Self {
        self.source_window = window;
        self
    }

    fn sources(&self, source_dir: &Path, entry: &CatalogEntry) -> Vec<PathBuf> {
        self.discovery.find(source_dir, &entry.source_pattern(), true, self.source_window)
    }
}

/// `<compiler dir>/lib/<flag>`.
pub fn runtime_library_dir(compiler: &Path, entry: &CatalogEntry) -> PathBuf {
    compiler
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(RUNTIME_LIB_DIR)
        .join(entry.compiler_flag)
}

impl LinkageResolution for LinkageResolver {
    fn resolve(&self, request: &GenerationRequest, compiler: &Path) -> LinkageDescriptor {
        let mut linkage = LinkageDescriptor::new();
        let convention = LinkageConvention::for_language(request.language);
        let entry = match LanguageCatalog::resolve(request.language) {
            Ok(entry) => entry,
            Err(_) => return linkage,
        };

        let source_dir = request.output_dir.join(entry.output_subdir);
        let runtime_dir = runtime_library_dir(compiler, entry);

        match convention {
            LinkageConvention::Managed => {
                linkage.add_include_directory(&source_dir);
                linkage.add_library_path(runtime_dir);
                linkage.add_library_path(&request.output_dir);
                linkage.add_library(MANAGED_RUNTIME_LIBRARY);
                linkage.extend_sources(self.sources(&source_dir, entry));
            }
            LinkageConvention::Native | LinkageConvention::Jvm => {
                linkage.add_include_directory(&source_dir);
                linkage.add_library_path(&source_dir);
                linkage.add_library_path(runtime_dir);
                linkage.extend_sources(self.sources(&source_dir, entry));
            }
            LinkageConvention::Unlinked => {}
        }

        tracing::debug!(
            "resolved {} linkage for {}: {} include dir(s), {} library path(s), {} source(s)",
            request.language,
            request.spec.main_spec_file().display(),
            linkage.include_directories.len(),
            linkage.library_paths.len(),
            linkage.sources.len()
        );
        linkage
    }
}
