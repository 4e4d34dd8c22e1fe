#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Generation-and-linkage pipeline for IDL client bindings.
//!
//! Given a service spec, a client language and a platform, the pipeline locates
//! the external spec compiler, runs it, finds the sources it wrote and turns
//! them into a [`types::LinkageDescriptor`] for the build system.
//!
//! ## Module Organization
//!
//! - `tool_resolver` - Locating the spec compiler binary
//! - `process` - Running external processes
//! - `translator` - IDL-to-common-representation translator seam
//! - `generator` - Argument building and compiler invocation
//! - `linkage` - Turning compiler output into linkage metadata
//! - `provider` - The facade composing all of the above

use thiserror::Error;
use types::{ClientLanguage, ClientPlatform, CompilerKind};

/// Convenient result type for pipeline operations.
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Errors that can occur while generating a client.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No compiler is installed for the requested platform.
    #[error("No {kind} compiler found for platform {platform}")]
    CompilerNotFound {
        /// Compiler family that was looked up
        kind: CompilerKind,
        /// Platform it was looked up for
        platform: ClientPlatform,
    },
    /// The compiler could not be started or exited unsuccessfully.
    #[error("Spec compiler failed ({reason}): {command}")]
    ProcessExecutionFailed {
        /// Rendered command line
        command: String,
        /// Exit code, if the process produced one
        exit_code: Option<i32>,
        /// Short description of the failure
        reason: String,
    },
    /// The IDL-to-common translator reported failure.
    #[error("IDL translation failed for {}", spec.display())]
    TranslationFailed {
        /// Main spec file that was being translated
        spec: std::path::PathBuf,
    },
    /// The language has no catalog entry.
    #[error("Unsupported client language: {0}")]
    UnsupportedLanguage(ClientLanguage),
    /// The requested operation is not implemented.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

impl From<types::UnsupportedLanguage> for GenerationError {
    fn from(err: types::UnsupportedLanguage) -> Self { GenerationError::UnsupportedLanguage(err.0) }
}

// Module declarations
pub mod generator;
pub mod linkage;
pub mod process;
pub mod provider;
pub mod tool_resolver;
pub mod translator;

pub use generator::SpecGenerator;
pub use linkage::{GenerationRequest, LinkageConvention, LinkageResolution, LinkageResolver};
pub use process::{CommandLine, ProcessRunner, SystemProcessRunner};
pub use provider::{SpecProvider, SpecProviderBuilder};
pub use tool_resolver::{
    ChainedToolResolver, ConventionalToolResolver, FixedToolResolver, SearchPathResolver,
    ToolResolver,
};
pub use translator::{CommandTranslator, IdlTranslator, UnavailableTranslator};
