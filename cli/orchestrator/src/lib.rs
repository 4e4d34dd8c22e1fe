#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
//! Command implementations for the Weft CLI.

use std::io::Write;
use std::path::{Path, PathBuf};

use config::Config;
use pipeline::{GenerationError, SpecProvider};
use thiserror::Error;
use types::{ClientLanguage, ClientPlatform, LanguageCatalog, ServiceSpec};

/// Errors that can occur while running a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    /// The spec arguments do not name an existing spec.
    #[error(transparent)]
    Spec(#[from] types::SpecError),
    /// The pipeline reported an error.
    #[error(transparent)]
    Generation(#[from] GenerationError),
    /// Writing output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Serializing the linkage descriptor failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

/// Spec and output location shared by the generation commands.
#[derive(Debug, Clone)]
pub struct Target {
    /// Directory holding the spec files
    pub spec_dir: PathBuf,
    /// Main spec file, relative to `spec_dir`
    pub main: PathBuf,
    /// Output directory; the configured one when `None`
    pub out: Option<PathBuf>,
}

impl Target {
    fn spec(&self) -> Result<ServiceSpec> { Ok(ServiceSpec::new(&self.spec_dir, &self.main)?) }

    fn output_dir(&self, config: &Config) -> Result<PathBuf> {
        let out = self.out.as_deref().unwrap_or(&config.generation.output_dir);
        Ok(path::absolutize(out)?)
    }
}

/// Translate a spec to the common representation and print the produced files.
pub fn run_common(
    config: &Config,
    target: &Target,
    translator: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let mut config = config.clone();
    if let Some(translator) = translator {
        config.tools.translator = Some(translator.to_path_buf());
    }
    let spec = target.spec()?;
    let provider = SpecProvider::from_config(&config);
    let output_dir = target.output_dir(&config)?;
    std::fs::create_dir_all(&output_dir)?;

    for file in provider.to_common_spec(&spec, &output_dir)? {
        writeln!(out, "{}", file.display())?;
    }
    Ok(())
}

/// Generate a client and print its linkage descriptor as JSON.
pub fn run_client(
    config: &Config,
    target: &Target,
    language: ClientLanguage,
    platform: ClientPlatform,
    out: &mut impl Write,
) -> Result<()> {
    let spec = target.spec()?;
    let provider = SpecProvider::from_config(config);
    let output_dir = target.output_dir(config)?;
    std::fs::create_dir_all(&output_dir)?;

    let linkage = provider.generate_service_client(&spec, &output_dir, language, platform)?;
    serde_json::to_writer_pretty(&mut *out, &linkage)?;
    writeln!(out)?;
    Ok(())
}

/// Generate a service skeleton.
pub fn run_sketch(
    config: &Config,
    target: &Target,
    language: ClientLanguage,
    platform: ClientPlatform,
    out: &mut impl Write,
) -> Result<()> {
    let provider = SpecProvider::from_config(config);
    let output_dir = target.output_dir(config)?;
    let linkage =
        provider.generate_service_sketch(&target.spec()?, &output_dir, language, platform)?;
    serde_json::to_writer_pretty(&mut *out, &linkage)?;
    writeln!(out)?;
    Ok(())
}

/// Print the language catalog, one `language<TAB>flag<TAB>dir<TAB>extension` row per entry.
pub fn list_languages(out: &mut impl Write) -> Result<()> {
    for entry in LanguageCatalog::entries() {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            entry.language.display_name(),
            entry.compiler_flag,
            entry.output_subdir,
            entry.source_extension
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_languages() {
        let mut out = Vec::new();
        list_languages(&mut out).expect("writing to a Vec cannot fail");
        let text = String::from_utf8(out).expect("utf-8 output");
        assert_eq!(text.lines().count(), LanguageCatalog::entries().len());
        assert!(text.contains("C#\tcsharp\tgen-csharp\tcs"));
        assert!(!text.contains("Go"));
    }

    #[test]
    fn test_sketch_reports_not_implemented() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        std::fs::write(dir.path().join("Foo.thrift"), "service Foo {}")
            .expect("Failed to write spec");
        let target = Target {
            spec_dir: dir.path().to_path_buf(),
            main: PathBuf::from("Foo.thrift"),
            out: Some(dir.path().join("out")),
        };

        let mut out = Vec::new();
        let err = run_sketch(
            &Config::default(),
            &target,
            ClientLanguage::CSharp,
            ClientPlatform::Linux,
            &mut out,
        )
        .expect_err("sketch generation is not implemented");
        assert!(matches!(err, CliError::Generation(GenerationError::NotImplemented(_))));
        assert!(out.is_empty());
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_missing_spec_is_reported_before_generation() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let target = Target {
            spec_dir: dir.path().to_path_buf(),
            main: PathBuf::from("Missing.thrift"),
            out: Some(dir.path().join("out")),
        };
        let mut out = Vec::new();
        let err = run_client(
            &Config::default(),
            &target,
            ClientLanguage::Java,
            ClientPlatform::Linux,
            &mut out,
        )
        .expect_err("spec is missing");
        assert!(matches!(err, CliError::Spec(types::SpecError::MissingMainSpec(_))));
    }
}
