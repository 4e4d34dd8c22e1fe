//! The spec provider facade.
//!
//! `SpecProvider` is the entry point the rest of the toolchain uses. It wires
//! the generator and linkage resolver together and turns every outcome into
//! either artifacts or a [`GenerationError`].

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use config::Config;
use path::{FileDiscovery, FsDiscovery};
use types::{ClientLanguage, ClientPlatform, CompilerKind, LinkageDescriptor, ServiceSpec};

use crate::generator::SpecGenerator;
use crate::linkage::{GenerationRequest, LinkageConvention, LinkageResolution, LinkageResolver};
use crate::process::{ProcessRunner, SystemProcessRunner};
use crate::tool_resolver::{ChainedToolResolver, ConventionalToolResolver, ToolResolver};
use crate::translator::{CommandTranslator, IdlTranslator, UnavailableTranslator};
use crate::GenerationError;

/// Generates client bindings from IDL specs for one compiler family.
pub struct SpecProvider {
    generator: SpecGenerator,
    linkage: Arc<dyn LinkageResolution>,
}

impl SpecProvider {
    /// Create a new builder for SpecProvider
    pub fn builder() -> SpecProviderBuilder { SpecProviderBuilder::default() }

    /// Provider wired from a configuration file's settings.
    pub fn from_config(config: &Config) -> Self {
        let runner: Arc<dyn ProcessRunner> = Arc::new(SystemProcessRunner::new());
        let translator: Arc<dyn IdlTranslator> = match &config.tools.translator {
            Some(executable) => Arc::new(CommandTranslator::with_runner(executable, runner.clone())),
            None => Arc::new(UnavailableTranslator),
        };

        Self::builder()
            .tool_resolver(Arc::new(ChainedToolResolver::from_config(config)))
            .process_runner(runner)
            .translator(translator)
            .common_output(
                config.generation.common_extension.clone(),
                config.generation.common_window(),
            )
            .source_window(config.generation.client_window())
            .build()
    }

    /// Compiler family this provider generates with.
    pub fn spec_kind(&self) -> CompilerKind { self.generator.kind() }

    /// Translate `spec` into common-representation files under `output_dir`.
    pub fn to_common_spec(
        &self,
        spec: &ServiceSpec,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>, GenerationError> {
        self.generator
            .translate_to_common(spec, output_dir)
            .ok_or_else(|| GenerationError::TranslationFailed { spec: spec.main_spec_path() })
    }

    /// Generate a `language` client for `platform` and resolve its linkage.
    ///
    /// A successful compile that left no fresh sources behind still succeeds,
    /// with whatever the linkage resolver could find.
    pub fn generate_service_client(
        &self,
        spec: &ServiceSpec,
        output_dir: &Path,
        language: ClientLanguage,
        platform: ClientPlatform,
    ) -> Result<LinkageDescriptor, GenerationError> {
        let compiler = self.generator.generate_client(spec, output_dir, language, platform)?;

        let request = GenerationRequest {
            spec: spec.clone(),
            output_dir: output_dir.to_path_buf(),
            language,
            platform,
        };
        let linkage = self.linkage.resolve(&request, &compiler);

        if linkage.sources.is_empty() && LinkageConvention::for_language(language).collects_sources()
        {
            tracing::warn!(
                "{} compiler succeeded but no fresh {} sources were found under {}",
                self.generator.kind(),
                language,
                output_dir.display()
            );
        }
        Ok(linkage)
    }

    /// Generate a service skeleton. Not implemented; always returns
    /// [`GenerationError::NotImplemented`] without touching anything.
    pub fn generate_service_sketch(
        &self,
        _spec: &ServiceSpec,
        _output_dir: &Path,
        _language: ClientLanguage,
        _platform: ClientPlatform,
    ) -> Result<LinkageDescriptor, GenerationError> {
        Err(GenerationError::NotImplemented("service sketch generation"))
    }
}

/// Builder for SpecProvider. Every collaborator has a default.
#[derive(Default)]
pub struct SpecProviderBuilder {
    kind: CompilerKind,
    /// Compiler lookup; defaults to the conventional tools root
    tools: Option<Arc<dyn ToolResolver>>,
    /// Process execution; defaults to the system runner
    runner: Option<Arc<dyn ProcessRunner>>,
    /// IDL translator; defaults to one that always fails
    translator: Option<Arc<dyn IdlTranslator>>,
    /// File discovery; defaults to the filesystem
    discovery: Option<Arc<dyn FileDiscovery>>,
    /// Linkage resolution; defaults to [`LinkageResolver`] over `discovery`
    linkage: Option<Arc<dyn LinkageResolution>>,
    common_output: Option<(String, Duration)>,
    source_window: Option<Duration>,
}

impl SpecProviderBuilder {
    /// Set the compiler family
    pub fn kind(mut self, kind: CompilerKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the tool resolver
    pub fn tool_resolver(mut self, tools: Arc<dyn ToolResolver>) -> Self {
        self.tools = Some(tools);
        self
    }

    /// Set the process runner
    pub fn process_runner(mut self, runner: Arc<dyn ProcessRunner>) -> Self {
        self.runner = Some(runner);
        self
    }

    /// Set the IDL translator
    pub fn translator(mut self, translator: Arc<dyn IdlTranslator>) -> Self {
        self.translator = Some(translator);
        self
    }

    /// Set the file discovery used for translator output and generated sources
    pub fn discovery(mut self, discovery: Arc<dyn FileDiscovery>) -> Self {
        self.discovery = Some(discovery);
        self
    }

    /// Set the linkage resolver
    pub fn linkage_resolver(mut self, linkage: Arc<dyn LinkageResolution>) -> Self {
        self.linkage = Some(linkage);
        self
    }

    /// Set the extension and recency window for common-representation output
    pub fn common_output(mut self, extension: String, window: Duration) -> Self {
        self.common_output = Some((extension, window));
        self
    }

    /// Set the recency window for generated client sources
    pub fn source_window(mut self, window: Duration) -> Self {
        self.source_window = Some(window);
        self
    }

    /// Build the SpecProvider
    pub fn build(self) -> SpecProvider {
        let discovery = self.discovery.unwrap_or_else(|| Arc::new(FsDiscovery));
        let tools = self
            .tools
            .unwrap_or_else(|| Arc::new(ConventionalToolResolver::new(path::default_tools_root())));
        let runner = self.runner.unwrap_or_else(|| Arc::new(SystemProcessRunner::new()));
        let translator = self.translator.unwrap_or_else(|| Arc::new(UnavailableTranslator));

        let source_window = self.source_window;
        let linkage = self.linkage.unwrap_or_else(|| {
            let mut resolver = LinkageResolver::new(discovery.clone());
            if let Some(window) = source_window {
                resolver = resolver.with_source_window(window);
            }
            Arc::new(resolver)
        });

        let mut generator = SpecGenerator::new(self.kind, tools, runner, translator, discovery);
        if let Some((extension, window)) = self.common_output {
            generator = generator.with_common_output(extension, window);
        }

        SpecProvider { generator, linkage }
    }
}
