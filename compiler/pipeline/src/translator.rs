//! Seam for the external IDL-to-common-representation translator.
//!
//! The translator is a black box: it is handed the spec location, an output
//! directory and its arguments, and reports success or failure. Failure detail
//! stays with the translator.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::process::{CommandLine, ProcessRunner, SystemProcessRunner};

/// Translates an IDL spec into the common representation.
pub trait IdlTranslator: Send + Sync {
    /// Translate `input_dir/main_file` into `output_dir`. Returns `true` on success.
    fn to_common_interface(
        &self,
        input_dir: &Path,
        main_file: &Path,
        output_dir: &Path,
        args: &[OsString],
    ) -> bool;
}

/// Runs a translator executable as `<executable> <args...> <input_dir>/<main_file>`.
pub struct CommandTranslator {
    executable: PathBuf,
    runner: Arc<dyn ProcessRunner>,
}

impl CommandTranslator {
    /// Translator running `executable` through the system process runner.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self::with_runner(executable, Arc::new(SystemProcessRunner::new()))
    }

    /// Translator running `executable` through `runner`.
    pub fn with_runner(executable: impl Into<PathBuf>, runner: Arc<dyn ProcessRunner>) -> Self {
        Self { executable: executable.into(), runner }
    }
}

impl IdlTranslator for CommandTranslator {
    fn to_common_interface(
        &self,
        input_dir: &Path,
        main_file: &Path,
        _output_dir: &Path,
        args: &[OsString],
    ) -> bool {
        let mut argv = args.to_vec();
        argv.push(input_dir.join(main_file).into_os_string());

        match self.runner.run(&self.executable, &argv) {
            Ok(Some(0)) => true,
            Ok(code) => {
                tracing::warn!(
                    "translator exited with {:?}: {}",
                    code,
                    CommandLine::new(&self.executable, &argv)
                );
                false
            }
            Err(e) => {
                tracing::warn!("failed to start translator {}: {}", self.executable.display(), e);
                false
            }
        }
    }
}

/// Stand-in used when no translator is configured; always reports failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableTranslator;

impl IdlTranslator for UnavailableTranslator {
    fn to_common_interface(&self, _: &Path, main_file: &Path, _: &Path, _: &[OsString]) -> bool {
        tracing::warn!("no IDL translator configured, cannot translate {}", main_file.display());
        false
    }
}
