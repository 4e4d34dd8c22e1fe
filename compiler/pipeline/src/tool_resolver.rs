//! Locating the external spec compiler.
//!
//! Resolution is convention over configuration: compilers live under a tools
//! root as `<root>/<kind>/<platform>/<binary>`, with the runtime libraries the
//! generated code needs placed next to the binary under `lib/<language>`.
//! Not finding a compiler is an expected outcome and is reported as `None`.

use std::path::{Path, PathBuf};

use config::Config;
use types::{ClientPlatform, CompilerKind};

/// Finds the spec compiler binary for a platform.
pub trait ToolResolver: Send + Sync {
    /// Path to the `kind` compiler for `platform`, or `None` when none is installed.
    fn locate(&self, kind: CompilerKind, platform: ClientPlatform) -> Option<PathBuf>;
}

/// Looks for `<tools_root>/<kind>/<platform>/<binary>`.
#[derive(Debug, Clone)]
pub struct ConventionalToolResolver {
    tools_root: PathBuf,
}

impl ConventionalToolResolver {
    /// Create a resolver rooted at `tools_root`.
    pub fn new(tools_root: impl Into<PathBuf>) -> Self { Self { tools_root: tools_root.into() } }

    /// Root this resolver searches.
    pub fn tools_root(&self) -> &Path { &self.tools_root }

    /// Where the compiler would be installed, whether or not it is.
    pub fn candidate(&self, kind: CompilerKind, platform: ClientPlatform) -> PathBuf {
        self.tools_root.join(kind.as_str()).join(platform.as_str()).join(kind.binary_name(platform))
    }
}

impl ToolResolver for ConventionalToolResolver {
    fn locate(&self, kind: CompilerKind, platform: ClientPlatform) -> Option<PathBuf> {
        let candidate = self.candidate(kind, platform);
        if candidate.is_file() {
            Some(candidate)
        } else {
            tracing::debug!("no {} compiler at {}", kind, candidate.display());
            None
        }
    }
}

/// Always answers with one configured path, provided the file exists.
#[derive(Debug, Clone)]
pub struct FixedToolResolver {
    path: PathBuf,
}

impl FixedToolResolver {
    /// Create a resolver for an explicit compiler path.
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

impl ToolResolver for FixedToolResolver {
    fn locate(&self, _kind: CompilerKind, _platform: ClientPlatform) -> Option<PathBuf> {
        self.path.is_file().then(|| self.path.clone())
    }
}

/// Searches `PATH` for the compiler. Only answers for the host platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchPathResolver;

impl ToolResolver for SearchPathResolver {
    fn locate(&self, kind: CompilerKind, platform: ClientPlatform) -> Option<PathBuf> {
        if platform != ClientPlatform::host() {
            return None;
        }
        which::which(kind.binary_stem()).ok()
    }
}

/// Tries each resolver in turn; the first hit wins.
#[derive(Default)]
pub struct ChainedToolResolver {
    resolvers: Vec<Box<dyn ToolResolver>>,
}

impl ChainedToolResolver {
    /// Create an empty chain.
    pub fn new() -> Self { Self { resolvers: Vec::new() } }

    /// Append a resolver to the chain.
    pub fn with<R: ToolResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    /// Default chain for a configuration: explicit compiler path, then the
    /// tools root, then `PATH`.
    pub fn from_config(config: &Config) -> Self {
        let mut chain = Self::new();
        if let Some(compiler) = &config.tools.compiler {
            chain = chain.with(FixedToolResolver::new(compiler));
        }
        chain.with(ConventionalToolResolver::new(&config.tools.root)).with(SearchPathResolver)
    }
}

impl ToolResolver for ChainedToolResolver {
    fn locate(&self, kind: CompilerKind, platform: ClientPlatform) -> Option<PathBuf> {
        self.resolvers.iter().find_map(|resolver| resolver.locate(kind, platform))
    }
}
