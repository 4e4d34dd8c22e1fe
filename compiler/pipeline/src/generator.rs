//! Building compiler arguments and invoking the external tools.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use path::FileDiscovery;
use types::{ClientLanguage, ClientPlatform, CompilerKind, LanguageCatalog, ServiceSpec};

use crate::process::{CommandLine, ProcessRunner};
use crate::tool_resolver::ToolResolver;
use crate::translator::IdlTranslator;
use crate::GenerationError;

/// Suffix the translator gives to common-representation files (before the extension).
pub const COMMON_FILE_SUFFIX: &str = "_common";

/// Default extension of common-representation files.
pub const DEFAULT_COMMON_EXTENSION: &str = "cs";

/// Default recency window for common-representation output.
pub const DEFAULT_COMMON_WINDOW: Duration = Duration::from_secs(30);

/// Drives the translator and the spec compiler for one compiler family.
pub struct SpecGenerator {
    kind: CompilerKind,
    tools: Arc<dyn ToolResolver>,
    runner: Arc<dyn ProcessRunner>,
    translator: Arc<dyn IdlTranslator>,
    discovery: Arc<dyn FileDiscovery>,
    common_extension: String,
    common_window: Duration,
}

impl SpecGenerator {
    /// Create a generator for `kind` over the given collaborators.
    pub fn new(
        kind: CompilerKind,
        tools: Arc<dyn ToolResolver>,
        runner: Arc<dyn ProcessRunner>,
        translator: Arc<dyn IdlTranslator>,
        discovery: Arc<dyn FileDiscovery>,
    ) -> Self {
        Self {
            kind,
            tools,
            runner,
            translator,
            discovery,
            common_extension: DEFAULT_COMMON_EXTENSION.to_string(),
            common_window: DEFAULT_COMMON_WINDOW,
        }
    }

    /// Override how common-representation output is recognised.
    pub fn with_common_output(mut self, extension: impl Into<String>, window: Duration) -> Self {
        self.common_extension = extension.into();
        self.common_window = window;
        self
    }

    /// Compiler family this generator drives.
    pub fn kind(&self) -> CompilerKind { self.kind }

    /// Glob matching the translator's output files, e.g. `*_common.cs`.
    pub fn common_pattern(&self) -> String {
        format!("*{}.{}", COMMON_FILE_SUFFIX, self.common_extension)
    }

    /// Translate `spec` into the common representation under `output_dir`.
    ///
    /// Returns the freshly written common files, or `None` if the translator
    /// reported failure (in which case no discovery is attempted).
    pub fn translate_to_common(
        &self,
        spec: &ServiceSpec,
        output_dir: &Path,
    ) -> Option<Vec<PathBuf>> {
        let args = vec![
            OsString::from("-out"),
            output_dir.as_os_str().to_os_string(),
            // recursively translate included specs
            OsString::from("-r"),
        ];
        if !self.translator.to_common_interface(
            spec.directory(),
            spec.main_spec_file(),
            output_dir,
            &args,
        ) {
            return None;
        }
        Some(self.discovery.find(output_dir, &self.common_pattern(), false, self.common_window))
    }

    /// Run the spec compiler for `language` on `platform`.
    ///
    /// On success returns the compiler path, which linkage resolution needs to
    /// find the runtime libraries shipped next to it.
    pub fn generate_client(
        &self,
        spec: &ServiceSpec,
        output_dir: &Path,
        language: ClientLanguage,
        platform: ClientPlatform,
    ) -> Result<PathBuf, GenerationError> {
        let compiler = self.tools.locate(self.kind, platform).ok_or_else(|| {
            tracing::warn!("no {} compiler installed for {}", self.kind, platform);
            GenerationError::CompilerNotFound { kind: self.kind, platform }
        })?;
        tracing::debug!("using {} compiler at {}", self.kind, compiler.display());

        let entry = LanguageCatalog::resolve(language)?;

        let args = compiler_arguments(entry.compiler_flag, output_dir, &spec.main_spec_path());
        let command = CommandLine::new(&compiler, &args).to_string();

        match self.runner.run(&compiler, &args) {
            Ok(Some(0)) => Ok(compiler),
            Ok(code) => {
                let reason = match code {
                    Some(code) => format!("exit code {}", code),
                    None => "terminated without an exit code".to_string(),
                };
                tracing::warn!("{} compiler failed with {}", self.kind, reason);
                Err(GenerationError::ProcessExecutionFailed { command, exit_code: code, reason })
            }
            Err(e) => Err(GenerationError::ProcessExecutionFailed {
                command,
                exit_code: None,
                reason: format!("failed to start: {}", e),
            }),
        }
    }
}

/// Compiler argv: `--<flag> -r -out <output_dir> <main spec>`.
///
/// The order and spelling follow the spec compiler's command-line contract.
pub fn compiler_arguments(flag: &str, output_dir: &Path, main_spec: &Path) -> Vec<OsString> {
    vec![
        OsString::from(format!("--{}", flag)),
        OsString::from("-r"),
        OsString::from("-out"),
        output_dir.as_os_str().to_os_string(),
        main_spec.as_os_str().to_os_string(),
    ]
}
