#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Logging setup for the pipeline.
//!
//! Library crates log through `tracing`. Binaries call [`init`] once to install
//! the global subscriber; `RUST_LOG` overrides the level passed in.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Build the filter for `level`, letting `RUST_LOG` take precedence.
fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber at `level` (e.g. "info", "debug").
///
/// Events go to `file` (appended, without ANSI colors) when given, otherwise to
/// stderr. Later calls, or calls after another subscriber was installed, do
/// nothing. Fails only when the log file cannot be opened.
pub fn init(level: &str, file: Option<&Path>) -> io::Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(filter(level)).with_target(false);

    let _ = match file {
        Some(path) => builder
            .with_writer(Mutex::new(open_log_file(path)?))
            .with_ansi(false)
            .try_init(),
        None => builder.with_writer(io::stderr).try_init(),
    };
    Ok(())
}
