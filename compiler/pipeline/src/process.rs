//! Running external processes.
//!
//! Only the exit status of a process is consumed. Its output is either passed
//! through to the caller's terminal or discarded, never parsed.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs an executable to completion and reports how it exited.
pub trait ProcessRunner: Send + Sync {
    /// Run `executable` with `args`, blocking until it exits.
    ///
    /// Returns the exit code, or `None` when the process ended without one
    /// (e.g. killed by a signal). Spawn failures are returned as `Err`.
    fn run(&self, executable: &Path, args: &[OsString]) -> io::Result<Option<i32>>;
}

/// [`ProcessRunner`] backed by `std::process::Command`.
///
/// Each argument is handed to the OS as its own argv element, so paths with
/// spaces stay intact without any quoting.
#[derive(Debug, Clone, Copy)]
pub struct SystemProcessRunner {
    passthrough: bool,
}

impl SystemProcessRunner {
    /// Runner that lets the child write to the inherited stdout/stderr.
    pub fn new() -> Self { Self { passthrough: true } }

    /// Runner that discards the child's stdout/stderr.
    pub fn quiet() -> Self { Self { passthrough: false } }
}

impl Default for SystemProcessRunner {
    fn default() -> Self { Self::new() }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, executable: &Path, args: &[OsString]) -> io::Result<Option<i32>> {
        tracing::debug!("running {}", CommandLine::new(executable, args));
        let mut cmd = Command::new(executable);
        cmd.args(args).stdin(Stdio::null());
        if !self.passthrough {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        }
        let status = cmd.status()?;
        Ok(status.code())
    }
}

/// Printable form of a command line, for logs and error messages.
///
/// Arguments that are empty or contain whitespace or quotes are wrapped in
/// double quotes, with embedded quotes and backslashes escaped.
#[derive(Debug, Clone, Copy)]
pub struct CommandLine<'a> {
    executable: &'a Path,
    args: &'a [OsString],
}

impl<'a> CommandLine<'a> {
    /// Wrap an executable and its arguments.
    pub fn new(executable: &'a Path, args: &'a [OsString]) -> Self { Self { executable, args } }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, part: &str) -> fmt::Result {
    let needs_quotes = part.is_empty() || part.chars().any(|c| c.is_whitespace() || c == '"');
    if !needs_quotes {
        return f.write_str(part);
    }
    f.write_str("\"")?;
    for c in part.chars() {
        if c == '"' || c == '\\' {
            f.write_str("\\")?;
        }
        write!(f, "{}", c)?;
    }
    f.write_str("\"")
}

impl fmt::Display for CommandLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_quoted(f, &self.executable.to_string_lossy())?;
        for arg in self.args {
            f.write_str(" ")?;
            write_quoted(f, &arg.to_string_lossy())?;
        }
        Ok(())
    }
}
